//! Application error taxonomy
//!
//! Centralized error handling for the gateway. Every handler returns
//! `AppResult<T>`; the `IntoResponse` impl converts failures into the
//! `{"success": false, "error": ...}` envelope so the process never
//! crashes on a request-level fault.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

/// Result type for request handlers and the call workflow
pub type AppResult<T> = Result<T, AppError>;

/// Error type covering every failure class the gateway produces
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller-supplied fields are missing or malformed
    #[error("{0}")]
    Validation(String),

    /// Required credentials are not configured
    #[error("{0}")]
    Configuration(String),

    /// A remote API returned a non-success status; carries the remote body verbatim
    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// An outbound call exceeded the configured deadline
    #[error("upstream request timed out: {0}")]
    Timeout(String),

    /// The requested artifact has not been computed upstream yet.
    /// Distinct from failure: the caller should retry later.
    #[error("{0}")]
    NotYetAvailable(String),

    /// Unexpected local fault, e.g. a filesystem error while writing a report
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotYetAvailable(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_)
            | AppError::Upstream { .. }
            | AppError::Timeout(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The `error` field of the JSON envelope.
    ///
    /// Upstream bodies are forwarded verbatim: when the remote body parses
    /// as JSON it is embedded as JSON, otherwise as a string.
    fn error_value(&self) -> Value {
        match self {
            AppError::Upstream { body, .. } => {
                serde_json::from_str::<Value>(body).unwrap_or_else(|_| json!(body))
            }
            other => json!(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("request failed: {}", self);
        }
        let body = json!({
            "success": false,
            "error": self.error_value(),
        });
        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else {
            AppError::Upstream {
                status: err.status().map(|s| s.as_u16()).unwrap_or(502),
                body: err.to_string(),
            }
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
