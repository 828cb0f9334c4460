//! Catalog state store

use bookchain_common::CatalogPhase;
use dioxus::prelude::*;

/// State for one catalog view instance
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CatalogState {
    /// Starts at `Loading`, resolved once by the page's fetch
    pub phase: CatalogPhase,
}
