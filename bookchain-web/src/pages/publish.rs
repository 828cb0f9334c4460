use crate::services::use_services;
use bookchain_core::marketplace::PublishDraft;
use bookchain_core::upload::UploadFile;
use bookchain_ui::stores::{UploadState, UploadStateStoreExt};
use bookchain_ui::{PageContainer, UploadFormView};
use dioxus::prelude::*;
use tracing::error;

#[component]
pub fn Publish() -> Element {
    let services = use_services();
    let state = use_store(UploadState::default);

    let uploader = services.uploader.clone();
    let on_file_selected = move |evt: FormEvent| {
        let uploader = uploader.clone();
        spawn(async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            let name = file.name();

            state.file_name().set(Some(name.clone()));
            state.uploading().set(true);
            state.error().set(None);
            state.uri().set(None);

            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    error!("Failed to read {name}: {e}");
                    state.error().set(Some(format!("Could not read {name}")));
                    state.uploading().set(false);
                    return;
                }
            };

            let upload = UploadFile {
                name,
                bytes,
                content_type: file.content_type(),
            };
            match uploader.upload(upload).await {
                Ok(uri) => state.uri().set(Some(uri)),
                Err(e) => state.error().set(Some(e.to_string())),
            }
            state.uploading().set(false);
        });
    };

    let marketplace = services.marketplace.clone();
    let on_publish = move |_| {
        let marketplace = marketplace.clone();
        let draft = PublishDraft {
            title: state.file_name().read().clone().unwrap_or_default(),
            content_uri: state.uri().read().clone().unwrap_or_default(),
            ..PublishDraft::default()
        };
        spawn(async move {
            let outcome = marketplace.publish(&draft).await;
            state.notice().set(Some(outcome.message()));
        });
    };

    rsx! {
        PageContainer {
            UploadFormView { state, on_file_selected, on_publish }
        }
    }
}
