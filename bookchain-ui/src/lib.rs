//! bookchain-ui - Stores and pure view components for BookChain
//!
//! Views take state and callbacks as props and never fetch anything
//! themselves. The web crate wires them to services.

pub mod components;
pub mod stores;

pub use components::*;
