use crate::services::{use_services, use_wallet_session};
use crate::Route;
use bookchain_ui::stores::WalletSessionStoreExt;
use bookchain_ui::{AppLayoutView, NavItem, TitleBarView, WalletButtonView};
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();
    let services = use_services();
    let session = use_wallet_session();

    let nav_items = vec![
        NavItem {
            id: "catalog".to_string(),
            label: "Discover".to_string(),
            is_active: matches!(current_route, Route::Catalog {}),
        },
        NavItem {
            id: "publish".to_string(),
            label: "Publish".to_string(),
            is_active: matches!(current_route, Route::Publish {}),
        },
    ];

    let connector = services.wallet.clone();
    let on_connect = move |_| {
        let connector = connector.clone();
        spawn(async move {
            session.connecting().set(true);
            session.error().set(None);
            match connector.connect().await {
                Ok(address) => session.address().set(Some(address)),
                Err(e) => session.error().set(Some(e.to_string())),
            }
            session.connecting().set(false);
        });
    };

    let connector = services.wallet.clone();
    let on_disconnect = move |_| {
        let connector = connector.clone();
        spawn(async move {
            match connector.disconnect().await {
                Ok(()) => {
                    session.address().set(None);
                    session.error().set(None);
                }
                Err(e) => session.error().set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        AppLayoutView {
            title_bar: rsx! {
                TitleBarView {
                    nav_items,
                    on_nav_click: move |id: String| {
                        match id.as_str() {
                            "catalog" => {
                                navigator().push(Route::Catalog {});
                            }
                            "publish" => {
                                navigator().push(Route::Publish {});
                            }
                            _ => {}
                        }
                    },
                    wallet: rsx! {
                        WalletButtonView {
                            address: session.address().read().clone(),
                            connecting: *session.connecting().read(),
                            error: session.error().read().clone(),
                            on_connect,
                            on_disconnect,
                        }
                    },
                }
            },
            Outlet::<Route> {}
        }
    }
}
