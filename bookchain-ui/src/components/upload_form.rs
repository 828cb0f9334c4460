//! Publish page form: asset upload plus the publish stub

use crate::components::helpers::ErrorDisplay;
use crate::components::icons::{LoaderIcon, UploadIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::stores::upload::{UploadState, UploadStateStoreExt};
use dioxus::prelude::*;

/// Upload form view (pure, props-based)
///
/// The file input hands the raw change event to `on_file_selected`; reading
/// the file and talking to storage happens in the page.
#[component]
pub fn UploadFormView(
    state: ReadStore<UploadState>,
    on_file_selected: EventHandler<FormEvent>,
    on_publish: EventHandler<()>,
) -> Element {
    let uploading = *state.uploading().read();
    let file_name = state.file_name().read().clone();
    let uri = state.uri().read().clone();
    let error = state.error().read().clone();
    let notice = state.notice().read().clone();

    rsx! {
        div { class: "max-w-xl mx-auto bg-white rounded-lg shadow-md p-6 space-y-4",
            h2 { class: "text-2xl font-bold text-gray-900", "Publish a Book" }
            label { class: "flex flex-col items-center gap-2 border-2 border-dashed border-gray-300 rounded-lg p-6 cursor-pointer hover:border-purple-500",
                UploadIcon { class: "w-8 h-8 text-gray-400" }
                span { class: "text-sm text-gray-600", "Choose a cover image or book file" }
                input {
                    r#type: "file",
                    class: "hidden",
                    disabled: uploading,
                    onchange: move |evt| on_file_selected.call(evt),
                }
            }
            if uploading {
                div { class: "flex items-center gap-2 text-sm text-gray-600",
                    LoaderIcon { class: "w-4 h-4 animate-spin" }
                    if let Some(name) = &file_name {
                        "Uploading {name}..."
                    } else {
                        "Uploading..."
                    }
                }
            }
            if let Some(uri) = uri {
                div { class: "text-sm",
                    span { class: "text-gray-600", "Stored at " }
                    a {
                        class: "text-purple-600 break-all",
                        href: "{uri}",
                        target: "_blank",
                        "{uri}"
                    }
                }
            }
            if let Some(err) = error {
                ErrorDisplay { message: err }
            }
            div { class: "flex justify-end",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    disabled: uploading,
                    onclick: move |_| on_publish.call(()),
                    "Publish"
                }
            }
            if let Some(notice) = notice {
                p { class: "text-sm text-gray-500", "{notice}" }
            }
        }
    }
}
