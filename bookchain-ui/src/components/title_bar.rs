//! Title bar view component
//!
//! Pure, props-based header with the brand, page navigation and a slot for
//! the wallet control.

use crate::components::icons::BookOpenIcon;
use dioxus::prelude::*;

/// Navigation item for title bar
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Title bar view (pure, props-based)
#[component]
pub fn TitleBarView(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    /// Right-hand slot, usually the wallet button
    #[props(default)]
    wallet: Option<Element>,
) -> Element {
    rsx! {
        header {
            id: "title-bar",
            class: "shrink-0 bg-white shadow-sm",
            div { class: "container mx-auto px-4 h-16 flex items-center justify-between",
                div { class: "flex items-center gap-6",
                    div { class: "flex items-center gap-2 text-purple-600 font-bold text-xl",
                        BookOpenIcon { class: "w-6 h-6" }
                        "BookChain"
                    }
                    nav { class: "flex gap-2",
                        for item in nav_items.iter() {
                            NavButton {
                                key: "{item.id}",
                                is_active: item.is_active,
                                on_click: {
                                    let id = item.id.clone();
                                    move |_| on_nav_click.call(id.clone())
                                },
                                "{item.label}"
                            }
                        }
                    }
                }
                if let Some(wallet) = wallet {
                    {wallet}
                }
            }
        }
    }
}

/// Navigation button with generic children
#[component]
fn NavButton(is_active: bool, on_click: EventHandler<()>, children: Element) -> Element {
    let class = if is_active {
        "text-purple-700 text-sm px-3 py-2 rounded bg-purple-50 transition-colors"
    } else {
        "text-gray-600 text-sm px-3 py-2 rounded hover:bg-gray-100 hover:text-gray-900 transition-colors"
    };

    rsx! {
        button { class: "{class}", onclick: move |_| on_click.call(()), {children} }
    }
}
