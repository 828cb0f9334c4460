use async_trait::async_trait;
use bookchain_common::{Address, Book};

use super::{CatalogError, CatalogSource};
use crate::util::sleep_ms;

/// Built-in stand-in for the on-chain registry.
///
/// Waits a fixed latency, then lists the same two books every time.
pub struct SampleCatalog {
    latency_ms: u64,
}

impl SampleCatalog {
    pub fn new(latency_ms: u64) -> Self {
        Self { latency_ms }
    }
}

#[async_trait(?Send)]
impl CatalogSource for SampleCatalog {
    async fn list_published(&self) -> Result<Vec<Book>, CatalogError> {
        sleep_ms(self.latency_ms).await;
        Ok(sample_books())
    }
}

pub fn sample_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "The Blockchain Revolution".to_string(),
            description: "A comprehensive guide to understanding blockchain technology and its implications for the future of digital transactions.".to_string(),
            cover_image_uri: "https://images.unsplash.com/photo-1516414447565-b14be0adf13e?w=400&h=300&fit=crop".to_string(),
            content_uri: "ipfs://QmExample1".to_string(),
            author: Address::new("0x1234567890123456789012345678901234567890"),
            price: 0.1,
            is_published: true,
        },
        Book {
            id: 2,
            title: "Web3 Development".to_string(),
            description: "Learn how to build decentralized applications using modern web technologies and smart contracts.".to_string(),
            cover_image_uri: "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=400&h=300&fit=crop".to_string(),
            content_uri: "ipfs://QmExample2".to_string(),
            author: Address::new("0x2345678901234567890123456789012345678901"),
            price: 0.15,
            is_published: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn lists_two_fixed_books_after_latency() {
        let catalog = SampleCatalog::new(1000);
        let started = tokio::time::Instant::now();

        let books = catalog.list_published().await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
        let ids: Vec<u64> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(books[0].title, "The Blockchain Revolution");
        assert_eq!(books[1].title, "Web3 Development");
        assert_eq!(books[0].price, 0.1);
        assert_eq!(books[1].price, 0.15);
        assert!(books.iter().all(|b| b.is_published));
    }
}
