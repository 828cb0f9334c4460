//! Purchase and publish entry points
//!
//! Neither flow exists yet. Both return [`ActionOutcome::NotImplemented`] so a
//! caller can tell a missing feature apart from a failed call.

use std::fmt;

use bookchain_common::Address;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarketAction {
    Purchase,
    Publish,
}

impl fmt::Display for MarketAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketAction::Purchase => f.write_str("purchase"),
            MarketAction::Publish => f.write_str("publish"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    NotImplemented { action: MarketAction },
}

impl ActionOutcome {
    /// Short text for the UI.
    pub fn message(&self) -> String {
        match self {
            ActionOutcome::NotImplemented { action } => {
                let mut text = action.to_string();
                if let Some(first) = text.get_mut(..1) {
                    first.make_ascii_uppercase();
                }
                format!("{text} is not available yet")
            }
        }
    }
}

/// What a publisher fills in before the book goes on chain.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PublishDraft {
    pub title: String,
    pub description: String,
    pub cover_image_uri: String,
    pub content_uri: String,
    pub price: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Marketplace;

impl Marketplace {
    pub async fn purchase(&self, book_id: u64, buyer: Option<&Address>) -> ActionOutcome {
        info!(
            "Purchase book: {book_id} (buyer: {})",
            buyer.map(Address::short).unwrap_or_else(|| "none".to_string())
        );
        ActionOutcome::NotImplemented {
            action: MarketAction::Purchase,
        }
    }

    pub async fn publish(&self, draft: &PublishDraft) -> ActionOutcome {
        info!("Publish book: {:?} ({})", draft.title, draft.content_uri);
        ActionOutcome::NotImplemented {
            action: MarketAction::Publish,
        }
    }
}
