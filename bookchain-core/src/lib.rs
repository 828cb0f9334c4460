//! bookchain-core - Services behind the BookChain UI
//!
//! Catalog sources, wallet connection, asset uploads and configuration. Every
//! service is single-threaded: futures are `!Send` so they can hold browser
//! handles.

pub mod catalog;
pub mod config;
pub mod marketplace;
pub mod upload;
pub mod util;
pub mod wallet;
