//! Upload form state store

use dioxus::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct UploadState {
    /// Name of the file being (or last) uploaded
    pub file_name: Option<String>,
    pub uploading: bool,
    /// Gateway URI of the last successful upload
    pub uri: Option<String>,
    pub error: Option<String>,
    /// Feedback from the publish stub
    pub notice: Option<String>,
}
