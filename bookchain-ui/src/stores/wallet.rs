//! Wallet session store
//!
//! One instance per app, provided as context by the root component. Views
//! read it; only the wallet button handlers write it.

use bookchain_common::Address;
use dioxus::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct WalletSession {
    /// Connected account, `None` until connect succeeds or after disconnect
    pub address: Option<Address>,
    /// A connect request is waiting on the provider prompt
    pub connecting: bool,
    /// Last wallet error, shown next to the button
    pub error: Option<String>,
}
