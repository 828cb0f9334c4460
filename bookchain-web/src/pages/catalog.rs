use crate::services::{use_services, use_wallet_session};
use bookchain_core::catalog::{load_catalog, FetchGate};
use bookchain_ui::stores::{CatalogState, CatalogStateStoreExt, WalletSessionStoreExt};
use bookchain_ui::CatalogView;
use dioxus::prelude::*;
use tracing::error;

#[component]
pub fn Catalog() -> Element {
    let services = use_services();
    let session = use_wallet_session();
    let state = use_store(CatalogState::default);
    let gate = use_hook(FetchGate::new);
    let mut notice: Signal<Option<String>> = use_signal(|| None);

    // Late results must not land on an unmounted view
    use_drop({
        let gate = gate.clone();
        move || gate.teardown()
    });

    let source = services.catalog.clone();
    use_effect(move || {
        let gate = gate.clone();
        let source = source.clone();
        spawn(async move {
            if let Some(phase) = load_catalog(source.as_ref(), &gate).await {
                state.phase().set(phase);
            }
        });
    });

    let marketplace = services.marketplace.clone();

    rsx! {
        CatalogView {
            state,
            viewer: session.address().read().clone(),
            currency: services.config.currency_symbol.clone(),
            on_purchase: move |book_id: u64| {
                let marketplace = marketplace.clone();
                let buyer = session.address().read().clone();
                spawn(async move {
                    let outcome = marketplace.purchase(book_id, buyer.as_ref()).await;
                    notice.set(Some(outcome.message()));
                });
            },
            on_retry: move |_| reload_page(),
        }
        if let Some(text) = notice() {
            div { class: "fixed bottom-4 right-4 bg-gray-900 text-white text-sm rounded-md px-4 py-2 shadow-lg",
                onclick: move |_| notice.set(None),
                "{text}"
            }
        }
    }
}

/// "Try Again" reloads the whole page, which re-runs the single catalog fetch.
fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        error!("Failed to reload page: {e:?}");
    }
}
