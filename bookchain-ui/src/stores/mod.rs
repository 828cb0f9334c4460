//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing. Pages
//! in bookchain-web own the stores and hand them to the views here.

pub mod catalog;
pub mod upload;
pub mod wallet;

pub use catalog::*;
pub use upload::*;
pub use wallet::*;
