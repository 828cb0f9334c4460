//! Error display component

use dioxus::prelude::*;

/// Generic inline error text
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        p { class: "text-red-500", "data-testid": "error-message", "{message}" }
    }
}
