//! App layout view component
//!
//! Title bar on top, routed page content below.

use dioxus::prelude::*;

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    /// Optional title bar at the top
    #[props(default)]
    title_bar: Option<Element>,
) -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col bg-gray-50",
            if let Some(tb) = title_bar {
                {tb}
            }
            main { class: "flex-1", {children} }
        }
    }
}
