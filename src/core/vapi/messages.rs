//! Request and response types for the Vapi API
//!
//! These structs mirror the platform's wire format; field names follow
//! Vapi's camelCase schema via serde renames.

use serde::{Deserialize, Serialize};

// =============================================================================
// Assistant creation
// =============================================================================

/// Payload for `POST /assistant`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssistantRequest {
    pub name: String,
    /// Webhook URL the platform posts lifecycle events to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    pub first_message: String,
    pub first_message_mode: String,
    pub voice: VoiceSelection,
    pub model: ModelConfig,
    pub transcriber: TranscriberConfig,
    pub analysis_plan: AnalysisPlan,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSelection {
    pub provider: String,
    pub voice_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelConfig {
    pub provider: String,
    pub model: String,
    pub messages: Vec<PromptMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriberConfig {
    pub provider: String,
    pub language: String,
}

/// Post-call analysis configuration; the platform runs `summary_prompt`
/// against the transcript once the call ends
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPlan {
    pub summary_prompt: String,
}

/// Response from `POST /assistant`; only the identity token is used
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantResponse {
    pub id: String,
}

// =============================================================================
// Call start
// =============================================================================

/// Payload for `POST /call`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCallRequest {
    pub customer: Customer,
    pub assistant_id: String,
    pub phone_number_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    pub number: String,
    pub name: String,
}

/// Response from `POST /call`; only the call id is used
#[derive(Debug, Clone, Deserialize)]
pub struct CallResponse {
    pub id: String,
}

// =============================================================================
// Call metadata
// =============================================================================

/// Response from `GET /call/{id}`.
///
/// The transcript may appear at the top level or nested under the call
/// artifact, depending on how far post-call processing has progressed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallDetails {
    pub transcript: Option<String>,
    pub artifact: Option<CallArtifact>,
    pub analysis: Option<CallAnalysis>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallArtifact {
    pub transcript: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallAnalysis {
    pub summary: Option<String>,
}

impl CallDetails {
    /// Transcript text, preferring the top-level field over the artifact
    pub fn transcript_text(&self) -> Option<&str> {
        self.transcript
            .as_deref()
            .or_else(|| self.artifact.as_ref()?.transcript.as_deref())
    }

    /// Platform-computed summary, when post-call analysis has run
    pub fn summary_text(&self) -> Option<&str> {
        self.analysis.as_ref()?.summary.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_prefers_top_level() {
        let details: CallDetails = serde_json::from_str(
            r#"{"transcript":"top","artifact":{"transcript":"nested"}}"#,
        )
        .unwrap();
        assert_eq!(details.transcript_text(), Some("top"));
    }

    #[test]
    fn transcript_falls_back_to_artifact() {
        let details: CallDetails =
            serde_json::from_str(r#"{"artifact":{"transcript":"nested"}}"#).unwrap();
        assert_eq!(details.transcript_text(), Some("nested"));
    }

    #[test]
    fn missing_fields_deserialize_to_none() {
        let details: CallDetails = serde_json::from_str(r#"{"id":"c1"}"#).unwrap();
        assert_eq!(details.transcript_text(), None);
        assert_eq!(details.summary_text(), None);
    }

    #[test]
    fn assistant_request_serializes_camel_case() {
        let request = CreateAssistantRequest {
            name: "AI Recruiter Assistant".to_string(),
            server_url: Some("https://example.com/api/vapi/webhook".to_string()),
            first_message: "Hello".to_string(),
            first_message_mode: "assistant-speaks-first".to_string(),
            voice: VoiceSelection {
                provider: "vapi".to_string(),
                voice_id: "Rohan".to_string(),
            },
            model: ModelConfig {
                provider: "openai".to_string(),
                model: "gpt-4o".to_string(),
                messages: vec![PromptMessage {
                    role: "assistant".to_string(),
                    content: "persona".to_string(),
                }],
            },
            transcriber: TranscriberConfig {
                provider: "deepgram".to_string(),
                language: "en".to_string(),
            },
            analysis_plan: AnalysisPlan {
                summary_prompt: "summarize".to_string(),
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["voice"]["voiceId"], "Rohan");
        assert_eq!(value["firstMessageMode"], "assistant-speaks-first");
        assert_eq!(value["analysisPlan"]["summaryPrompt"], "summarize");
        assert_eq!(value["serverUrl"], "https://example.com/api/vapi/webhook");
    }
}
