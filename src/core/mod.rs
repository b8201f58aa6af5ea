//! Core gateway logic
//!
//! - `vapi` - call-platform API client (assistants, calls, voices)
//! - `gemini` - generative-text API client for report generation
//! - `calls` - the call workflow composing the two clients

pub mod calls;
pub mod gemini;
pub mod vapi;

use crate::errors::{AppError, AppResult};

/// Deserialize a success response, or forward the remote error body
/// verbatim as an upstream error
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> AppResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Upstream {
            status: status.as_u16(),
            body,
        });
    }
    response.json::<T>().await.map_err(|err| AppError::Upstream {
        status: status.as_u16(),
        body: format!("invalid response body: {err}"),
    })
}
