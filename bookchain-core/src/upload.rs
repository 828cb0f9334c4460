//! Uploads to web3.storage (IPFS + Filecoin)
//!
//! One file per call, sent as a single multipart part so the service wraps it
//! in a directory. The returned link points at the file inside that directory:
//! `https://<cid>.<gateway>/<file name>`.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::config::Config;

/// A local file picked for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

#[derive(Debug, Error)]
pub enum UploadCause {
    #[error("no storage token configured")]
    MissingToken,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("storage service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected storage response: {0}")]
    InvalidResponse(String),
    #[error("invalid content type: {0:?}")]
    InvalidContentType(String),
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to upload {file_name}: {cause}")]
    UploadFailed {
        file_name: String,
        #[source]
        cause: UploadCause,
    },
}

#[derive(Deserialize)]
struct UploadResponse {
    cid: String,
}

/// Client for the web3.storage HTTP upload API.
pub struct Web3StorageClient {
    api_url: String,
    token: Option<String>,
    gateway_host: String,
    http: reqwest::Client,
}

impl Web3StorageClient {
    pub fn new(api_url: String, token: Option<String>, gateway_host: String) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
            gateway_host,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.storage_api_url.clone(),
            config.storage_token.clone(),
            config.gateway_host.clone(),
        )
    }

    /// Store `file` and return a gateway URI for it.
    ///
    /// No retry, chunking, progress or size checks.
    pub async fn upload(&self, file: UploadFile) -> Result<String, UploadError> {
        let file_name = file.name.clone();
        match self.put(file).await {
            Ok(cid) => {
                let uri = gateway_uri(&cid, &self.gateway_host, &file_name);
                info!("Uploaded {file_name} to IPFS: {uri}");
                Ok(uri)
            }
            Err(cause) => {
                error!("Error uploading {file_name} to IPFS: {cause}");
                Err(UploadError::UploadFailed { file_name, cause })
            }
        }
    }

    async fn put(&self, file: UploadFile) -> Result<String, UploadCause> {
        let token = self.token.as_deref().ok_or(UploadCause::MissingToken)?;

        let mut part = Part::bytes(file.bytes).file_name(file.name);
        // An empty type means the picker could not tell; let the service sniff it
        if let Some(content_type) = file.content_type.as_deref().filter(|t| !t.trim().is_empty()) {
            part = part
                .mime_str(content_type)
                .map_err(|_| UploadCause::InvalidContentType(content_type.to_string()))?;
        }
        let form = Form::new().part("file", part);

        let resp = self
            .http
            .post(format!("{}/upload", self.api_url))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UploadCause::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: UploadResponse = resp
            .json()
            .await
            .map_err(|e| UploadCause::InvalidResponse(e.to_string()))?;
        if parsed.cid.is_empty() {
            return Err(UploadCause::InvalidResponse("empty cid".to_string()));
        }
        Ok(parsed.cid)
    }
}

/// `https://<cid>.<gateway_host>/<file_name>`, with the name encoded as a path segment.
pub fn gateway_uri(cid: &str, gateway_host: &str, file_name: &str) -> String {
    format!(
        "https://{cid}.{gateway_host}/{}",
        urlencoding::encode(file_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use axum::http::{HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::post;
    use axum::Router;

    const TOKEN: &str = "test-token";

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    async fn fake_upload(headers: HeaderMap, body: Bytes) -> axum::response::Response {
        let authorized = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            == Some("Bearer test-token");
        if !authorized {
            return (StatusCode::UNAUTHORIZED, "bad token").into_response();
        }
        let body = String::from_utf8_lossy(&body);
        if !body.contains("filename=\"cover.png\"") || !body.contains("PNGDATA") {
            return (StatusCode::BAD_REQUEST, "missing file part").into_response();
        }
        (
            [("content-type", "application/json")],
            r#"{"cid":"bafybeigdyrzt"}"#,
        )
            .into_response()
    }

    fn cover() -> UploadFile {
        UploadFile {
            name: "cover.png".to_string(),
            bytes: b"PNGDATA".to_vec(),
            content_type: Some("image/png".to_string()),
        }
    }

    #[tokio::test]
    async fn upload_returns_gateway_uri_for_file() {
        let base = serve(Router::new().route("/upload", post(fake_upload))).await;
        let client = Web3StorageClient::new(
            format!("{base}/"),
            Some(TOKEN.to_string()),
            "ipfs.w3s.link".to_string(),
        );

        let uri = client.upload(cover()).await.unwrap();

        assert_eq!(uri, "https://bafybeigdyrzt.ipfs.w3s.link/cover.png");
    }

    #[tokio::test]
    async fn service_rejection_is_upload_failed_with_status() {
        let base = serve(Router::new().route("/upload", post(fake_upload))).await;
        let client = Web3StorageClient::new(
            base,
            Some("wrong".to_string()),
            "ipfs.w3s.link".to_string(),
        );

        let err = client.upload(cover()).await.unwrap_err();

        let UploadError::UploadFailed { file_name, cause } = err;
        assert_eq!(file_name, "cover.png");
        assert!(matches!(cause, UploadCause::Status { status: 401, ref body } if body == "bad token"));
    }

    #[tokio::test]
    async fn missing_cid_is_invalid_response() {
        let base = serve(Router::new().route(
            "/upload",
            post(|| async { ([("content-type", "application/json")], r#"{"cid":""}"#) }),
        ))
        .await;
        let client = Web3StorageClient::new(base, Some(TOKEN.to_string()), "gw".to_string());

        let UploadError::UploadFailed { cause, .. } = client.upload(cover()).await.unwrap_err();
        assert!(matches!(cause, UploadCause::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn empty_content_type_is_left_to_the_service() {
        let base = serve(Router::new().route("/upload", post(fake_upload))).await;
        let client = Web3StorageClient::new(base, Some(TOKEN.to_string()), "gw".to_string());

        let file = UploadFile {
            content_type: Some(String::new()),
            ..cover()
        };
        let uri = client.upload(file).await.unwrap();

        assert_eq!(uri, "https://bafybeigdyrzt.gw/cover.png");
    }

    #[tokio::test]
    async fn malformed_content_type_is_not_a_network_error() {
        let base = serve(Router::new().route("/upload", post(fake_upload))).await;
        let client = Web3StorageClient::new(base, Some(TOKEN.to_string()), "gw".to_string());

        let file = UploadFile {
            content_type: Some("png".to_string()),
            ..cover()
        };
        let UploadError::UploadFailed { cause, .. } = client.upload(file).await.unwrap_err();

        assert!(matches!(cause, UploadCause::InvalidContentType(ref t) if t == "png"));
    }

    #[tokio::test]
    async fn missing_token_fails_before_any_request() {
        let client = Web3StorageClient::new(
            "http://127.0.0.1:9".to_string(),
            None,
            "gw".to_string(),
        );

        let UploadError::UploadFailed { cause, .. } = client.upload(cover()).await.unwrap_err();
        assert!(matches!(cause, UploadCause::MissingToken));
    }

    #[tokio::test]
    async fn unreachable_service_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = Web3StorageClient::new(
            format!("http://{addr}"),
            Some(TOKEN.to_string()),
            "gw".to_string(),
        );

        let UploadError::UploadFailed { cause, .. } = client.upload(cover()).await.unwrap_err();
        assert!(matches!(cause, UploadCause::Network(_)));
    }

    #[test]
    fn gateway_uri_encodes_file_name() {
        assert_eq!(
            gateway_uri("bafy", "ipfs.w3s.link", "my book.epub"),
            "https://bafy.ipfs.w3s.link/my%20book.epub"
        );
    }
}
