//! HTTP client for the Gemini generative-text API
//!
//! Single operation: run a text prompt through `generateContent` and
//! return the model's literal output. No caching; identical prompts may
//! produce different wording across calls unless the prompt itself asks
//! for determinism.

use tracing::debug;

use super::messages::{GenerateContentRequest, GenerateContentResponse};
use crate::config::ServerConfig;
use crate::core::read_json;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client from configuration; fails with a configuration
    /// error when the API key is absent
    pub fn from_config(http: reqwest::Client, config: &ServerConfig) -> AppResult<Self> {
        let api_key = config.gemini_api_key.clone().ok_or_else(|| {
            AppError::Configuration("Missing environment variable GEMINI_API_KEY.".to_string())
        })?;
        Ok(Self {
            http,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            model: config.gemini_model.clone(),
            api_key,
        })
    }

    /// Generate text for a prompt and return the first candidate, trimmed
    pub async fn generate(&self, prompt: String) -> AppResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        debug!(model = %self.model, prompt_len = prompt.len(), "generating content");
        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;
        let body: GenerateContentResponse = read_json(response).await?;
        body.first_candidate_text().ok_or_else(|| AppError::Upstream {
            status: 502,
            body: "generative API returned no candidates".to_string(),
        })
    }
}
