//! Report writer
//!
//! Persists a generated report to a uniquely named temporary artifact,
//! returns it as a text download, and deletes the artifact once the
//! response body has been built, success or failure. The per-request
//! uuid suffix keeps concurrent requests for the same call id from
//! colliding on the filesystem.

use std::path::PathBuf;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::errors::{AppError, AppResult};

/// Build the artifact path for one request
fn artifact_path(config: &ServerConfig, call_id: &str) -> PathBuf {
    let dir = config
        .report_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir);
    dir.join(format!("call-summary-{}-{}.txt", call_id, Uuid::new_v4()))
}

/// Call ids come from a URL path segment; reject anything that could
/// escape the report directory
pub fn is_valid_call_id(call_id: &str) -> bool {
    !call_id.is_empty() && !call_id.contains("..") && !call_id.contains('/')
}

/// Write the report artifact and stream it back as a download.
///
/// The artifact is removed before the response is returned; the download
/// filename keeps the bare call id.
pub async fn send_report(config: &ServerConfig, call_id: &str, report: &str) -> AppResult<Response> {
    if !is_valid_call_id(call_id) {
        return Err(AppError::Validation("Invalid callId format".to_string()));
    }

    let path = artifact_path(config, call_id);
    tokio::fs::write(&path, report).await?;
    debug!(path = %path.display(), "report artifact written");

    let contents = tokio::fs::read(&path).await;
    if let Err(err) = tokio::fs::remove_file(&path).await {
        warn!(path = %path.display(), %err, "failed to remove report artifact");
    }
    let contents = contents?;

    let download_name = format!("call-summary-{call_id}.txt");
    let response = (
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{download_name}\""),
            ),
        ],
        contents,
    )
        .into_response();
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(dir: PathBuf) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            tls: None,
            vapi_api_key: None,
            vapi_phone_number_id: None,
            vapi_base_url: "http://localhost:0".to_string(),
            vapi_webhook_url: None,
            gemini_api_key: None,
            gemini_base_url: "http://localhost:0".to_string(),
            gemini_model: "gemini-1.5-flash".to_string(),
            report_dir: Some(dir),
            report_deterministic: false,
            cors_allowed_origins: None,
            upstream_timeout_seconds: 5,
        }
    }

    #[test]
    fn call_id_validation_rejects_path_escapes() {
        assert!(is_valid_call_id("abc-123"));
        assert!(!is_valid_call_id(""));
        assert!(!is_valid_call_id("../etc/passwd"));
        assert!(!is_valid_call_id("a/b"));
    }

    #[test]
    fn artifact_names_are_unique_per_request() {
        let config = test_config(PathBuf::from("/tmp"));
        let first = artifact_path(&config, "c1");
        let second = artifact_path(&config, "c1");
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn artifact_is_removed_after_send() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf());

        let response = send_report(&config, "c1", "scored report").await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let leftover: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert!(leftover.is_empty(), "artifact should be deleted after send");
    }

    #[tokio::test]
    async fn response_carries_download_headers() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path().to_path_buf());

        let response = send_report(&config, "c1", "scored report").await.unwrap();
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(disposition, "attachment; filename=\"call-summary-c1.txt\"");
    }
}
