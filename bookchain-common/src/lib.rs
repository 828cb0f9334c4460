//! bookchain-common - Data types and display decisions shared by every crate
//!
//! Nothing in here performs I/O. Services live in `bookchain-core`, views in
//! `bookchain-ui`.

mod address;
mod book;
mod catalog_phase;
mod cover;
mod purchase;

pub use address::Address;
pub use book::Book;
pub use catalog_phase::{CatalogPhase, LOAD_ERROR_MESSAGE};
pub use cover::{CoverSource, PLACEHOLDER_COVER_URI};
pub use purchase::PurchaseControl;
