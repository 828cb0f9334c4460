use serde::{Deserialize, Serialize};

use crate::Address;

/// A published book as listed by the catalog.
///
/// Field names on the wire follow the registry/indexer JSON shape
/// (`coverImageURI`, `contentURI`, `isPublished`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Remote cover image. May fail to load; the UI substitutes a placeholder.
    #[serde(rename = "coverImageURI")]
    pub cover_image_uri: String,
    /// Pointer into decentralized storage. Opaque to the UI.
    #[serde(rename = "contentURI")]
    pub content_uri: String,
    pub author: Address,
    /// Display-only amount in the chain's native currency.
    pub price: f64,
    /// Not enforced by any source; records are shown as returned.
    pub is_published: bool,
}

impl Book {
    /// Whether `viewer` is this book's author. `None` never owns anything.
    pub fn is_authored_by(&self, viewer: Option<&Address>) -> bool {
        viewer.is_some_and(|viewer| *viewer == self.author)
    }

    pub fn price_label(&self, currency: &str) -> String {
        format!("{} {}", self.price, currency)
    }
}
