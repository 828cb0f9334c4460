//! Wallet connect/disconnect control

use crate::components::icons::WalletIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use bookchain_common::Address;
use dioxus::prelude::*;

/// Wallet button view (pure, props-based)
///
/// Shows "Connect Wallet" until an address is present, then the short address
/// and a disconnect action. Wallet errors render underneath.
#[component]
pub fn WalletButtonView(
    address: Option<Address>,
    connecting: bool,
    error: Option<String>,
    on_connect: EventHandler<()>,
    on_disconnect: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex flex-col items-end gap-1",
            if let Some((full, short)) = address.map(|a| (a.to_string(), a.short())) {
                div { class: "flex items-center gap-2",
                    span {
                        class: "font-mono text-sm text-gray-700",
                        title: "{full}",
                        "{short}"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        onclick: move |_| on_disconnect.call(()),
                        "Disconnect"
                    }
                }
            } else {
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    disabled: connecting,
                    onclick: move |_| on_connect.call(()),
                    WalletIcon { class: "w-4 h-4" }
                    if connecting {
                        "Connecting..."
                    } else {
                        "Connect Wallet"
                    }
                }
            }
            if let Some(err) = error {
                p { class: "text-xs text-red-500", "{err}" }
            }
        }
    }
}
