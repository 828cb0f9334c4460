//! bookchain-web - Browser front end for BookChain
//!
//! Routes, pages and the browser-side adapters (injected Ethereum provider,
//! localStorage) behind the services in bookchain-core.

pub mod ethereum;
pub mod pages;
pub mod services;
pub mod storage;

use bookchain_ui::stores::{WalletSession, WalletSessionStoreExt};
use dioxus::prelude::*;
use pages::{AppLayout, Catalog, Publish};
use services::AppServices;
use tracing::debug;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Catalog {},
    #[route("/publish")]
    Publish {},
}

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let services = use_context_provider(AppServices::from_browser);
    let session = use_store(WalletSession::default);
    use_context_provider(|| session);

    // Pick up a wallet connected on an earlier visit
    use_effect(move || {
        let wallet = services.wallet.clone();
        spawn(async move {
            if let Some(address) = wallet.restore().await {
                session.address().set(Some(address));
            }
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
