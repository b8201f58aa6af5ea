//! Call workflow
//!
//! Composes the two provider clients into the gateway's three
//! operations: start a simulated call, fetch the platform-computed
//! summary, and build the downloadable performance report.
//!
//! There is no partial-failure handling: when call-start fails after
//! assistant creation succeeded, the orphaned assistant is not cleaned
//! up.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::gemini::GeminiClient;
use crate::core::vapi::messages::{
    AnalysisPlan, CreateAssistantRequest, Customer, ModelConfig, PromptMessage, StartCallRequest,
    TranscriberConfig, VoiceSelection,
};
use crate::core::vapi::{VapiClient, resolve_voice_id};
use crate::errors::{AppError, AppResult};
use crate::prompts;
use crate::state::AppState;

/// Display name registered on every assistant
const ASSISTANT_NAME: &str = "AI Recruiter Assistant";

/// Body of `POST /api/call`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    pub candidate_name: Option<String>,
    pub phone_number: Option<String>,
    pub voice_id: Option<String>,
}

/// Identifiers returned once the platform accepted the call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallStarted {
    pub assistant_id: String,
    pub call_id: String,
}

/// Start a simulated call: validate input, create an assistant carrying
/// the persona and analysis prompts, then dial the candidate with it.
pub async fn start_simulated_call(
    state: &AppState,
    request: CallRequest,
) -> AppResult<CallStarted> {
    let candidate_name = non_empty(request.candidate_name);
    let phone_number = non_empty(request.phone_number);
    let (candidate_name, phone_number) = match (candidate_name, phone_number) {
        (Some(name), Some(number)) => (name, number),
        _ => {
            return Err(AppError::Validation(
                "Missing required fields: candidateName and phoneNumber".to_string(),
            ));
        }
    };

    // Fail fast on missing credentials, before any remote call
    let vapi = VapiClient::from_config(state.http.clone(), &state.config)?;
    let phone_number_id = state.config.vapi_phone_number_id.clone().ok_or_else(|| {
        AppError::Configuration(
            "Missing environment variables. Ensure VAPI_API_KEY and VAPI_PHONE_NUMBER_ID are set."
                .to_string(),
        )
    })?;

    let voice_id = resolve_voice_id(request.voice_id.as_deref());

    let assistant_request = CreateAssistantRequest {
        name: ASSISTANT_NAME.to_string(),
        server_url: state.config.vapi_webhook_url.clone(),
        first_message: "Hello".to_string(),
        first_message_mode: "assistant-speaks-first".to_string(),
        voice: VoiceSelection {
            provider: "vapi".to_string(),
            voice_id: voice_id.to_string(),
        },
        model: ModelConfig {
            provider: "openai".to_string(),
            model: "gpt-4o".to_string(),
            messages: vec![PromptMessage {
                role: "assistant".to_string(),
                content: prompts::CUSTOMER_PERSONA.to_string(),
            }],
        },
        transcriber: TranscriberConfig {
            provider: "deepgram".to_string(),
            language: "en".to_string(),
        },
        analysis_plan: AnalysisPlan {
            summary_prompt: prompts::ANALYSIS_SUMMARY_PROMPT.to_string(),
        },
    };

    let assistant_id = vapi.create_assistant(&assistant_request).await?;

    let call_request = StartCallRequest {
        customer: Customer {
            number: phone_number,
            name: candidate_name,
        },
        assistant_id: assistant_id.clone(),
        phone_number_id,
    };
    let call_id = vapi.start_call(&call_request).await?;

    info!(%assistant_id, %call_id, voice = voice_id, "simulated call started");
    Ok(CallStarted {
        assistant_id,
        call_id,
    })
}

/// Fetch the platform-computed summary for a call.
///
/// A call without a summary is not an error: post-call analysis simply
/// has not finished, and the caller should retry later.
pub async fn fetch_summary(state: &AppState, call_id: &str) -> AppResult<String> {
    let vapi = VapiClient::from_config(state.http.clone(), &state.config)?;
    let details = vapi.get_call(call_id).await?;
    details
        .summary_text()
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::NotYetAvailable(
                "No summary available yet. Please try again later.".to_string(),
            )
        })
}

/// Build the scored performance report for a call.
///
/// A missing transcript is replaced with a fixed placeholder rather than
/// failing, so a report is always produced. The transcript is embedded
/// verbatim into the evaluation prompt; the model's literal output is
/// the report.
pub async fn build_report(state: &AppState, call_id: &str) -> AppResult<String> {
    let vapi = VapiClient::from_config(state.http.clone(), &state.config)?;
    let details = vapi.get_call(call_id).await?;
    let transcript = details
        .transcript_text()
        .unwrap_or(prompts::TRANSCRIPT_PLACEHOLDER);

    let prompt = prompts::evaluation_prompt(transcript, state.config.report_deterministic);
    let gemini = GeminiClient::from_config(state.http.clone(), &state.config)?;
    let report = gemini.generate(prompt).await?;
    info!(%call_id, report_len = report.len(), "report generated");
    Ok(report)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
