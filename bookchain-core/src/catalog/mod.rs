//! Book catalog sources and the load contract used by catalog views
//!
//! A view asks for the catalog once through [`load_catalog`]. The
//! [`FetchGate`] keeps it to a single request per view and drops results
//! that arrive after the view is gone.

mod gate;
mod indexer;
mod sample;

use std::rc::Rc;

use async_trait::async_trait;
use bookchain_common::{Book, CatalogPhase};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::Config;

pub use gate::{FetchGate, FetchTicket};
pub use indexer::IndexerCatalog;
pub use sample::{sample_books, SampleCatalog};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// Network, status, decode or contract-call failure in the underlying source
    #[error("failed to fetch catalog: {0}")]
    FetchFailed(String),
}

/// Anything that can list published books.
///
/// Implementations return records as-is: no pagination, no filtering on
/// `is_published`, no sorting.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn list_published(&self) -> Result<Vec<Book>, CatalogError>;
}

/// Pick the source for this deployment: the indexer when one is configured,
/// the built-in sample otherwise.
pub fn catalog_source(config: &Config) -> Rc<dyn CatalogSource> {
    match &config.catalog_indexer_url {
        Some(url) => {
            info!("Using catalog indexer at {url}");
            Rc::new(IndexerCatalog::new(url.clone()))
        }
        None => {
            info!("No indexer configured, using sample catalog");
            Rc::new(SampleCatalog::new(config.catalog_latency_ms))
        }
    }
}

/// Fetch the catalog for one view and resolve its phase.
///
/// Returns `None` when the gate refuses the fetch (one is already in flight or
/// done) or when the view was torn down before the result arrived.
pub async fn load_catalog(source: &dyn CatalogSource, gate: &FetchGate) -> Option<CatalogPhase> {
    let Some(ticket) = gate.begin() else {
        debug!("Catalog fetch skipped: already started or view torn down");
        return None;
    };

    let result = source.list_published().await;
    match &result {
        Ok(books) => info!("Fetched {} books", books.len()),
        Err(e) => error!("Error fetching books: {e}"),
    }

    let phase = CatalogPhase::from_result(result);
    let applied = ticket.complete(phase);
    if applied.is_none() {
        debug!("Catalog view torn down before fetch finished, discarding result");
    }
    applied
}
