use async_trait::async_trait;
use bookchain_common::Book;

use super::{CatalogError, CatalogSource};

/// Catalog backed by an indexing service that mirrors the on-chain registry.
///
/// Expects `GET <url>` to answer with a JSON array of books.
pub struct IndexerCatalog {
    url: String,
    http: reqwest::Client,
}

impl IndexerCatalog {
    pub fn new(url: String) -> Self {
        Self {
            url,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for IndexerCatalog {
    async fn list_published(&self) -> Result<Vec<Book>, CatalogError> {
        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::FetchFailed(format!("network error: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::FetchFailed(format!(
                "indexer returned {status}"
            )));
        }

        resp.json()
            .await
            .map_err(|e| CatalogError::FetchFailed(format!("parse error: {e}")))
    }
}
