//! Loading spinner component

use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Loading spinner with optional message
#[component]
pub fn LoadingSpinner(
    /// Message to display next to spinner (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-20",
            LoaderIcon { class: "w-8 h-8 text-purple-600 animate-spin" }
            span { class: "ml-2 text-gray-600", "{message}" }
        }
    }
}
