//! HTTP client for the Vapi call platform
//!
//! Thin wrapper over `reqwest`: Bearer auth, JSON bodies, non-success
//! responses forwarded verbatim as upstream errors. No retries; a failed
//! request immediately fails the operation.

use tracing::debug;

use super::messages::{
    AssistantResponse, CallDetails, CallResponse, CreateAssistantRequest, StartCallRequest,
};
use crate::config::ServerConfig;
use crate::core::read_json;
use crate::errors::{AppError, AppResult};

/// Client bound to one API key and base URL
#[derive(Debug, Clone)]
pub struct VapiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl VapiClient {
    /// Build a client from configuration.
    ///
    /// Fails with a configuration error when the platform API key is
    /// absent, before any remote call is attempted.
    pub fn from_config(http: reqwest::Client, config: &ServerConfig) -> AppResult<Self> {
        let api_key = config.vapi_api_key.clone().ok_or_else(|| {
            AppError::Configuration(
                "Missing environment variables. Ensure VAPI_API_KEY and VAPI_PHONE_NUMBER_ID are set."
                    .to_string(),
            )
        })?;
        Ok(Self {
            http,
            base_url: config.vapi_base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Create an assistant; returns its identity token
    pub async fn create_assistant(&self, request: &CreateAssistantRequest) -> AppResult<String> {
        let url = format!("{}/assistant", self.base_url);
        debug!(voice = %request.voice.voice_id, "creating assistant");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;
        let assistant: AssistantResponse = read_json(response).await?;
        Ok(assistant.id)
    }

    /// Start an outbound call with a previously created assistant
    pub async fn start_call(&self, request: &StartCallRequest) -> AppResult<String> {
        let url = format!("{}/call", self.base_url);
        debug!(assistant_id = %request.assistant_id, "starting call");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;
        let call: CallResponse = read_json(response).await?;
        Ok(call.id)
    }

    /// Fetch call metadata (transcript and analysis, when present)
    pub async fn get_call(&self, call_id: &str) -> AppResult<CallDetails> {
        let url = format!("{}/call/{}", self.base_url, call_id);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        read_json(response).await
    }
}
