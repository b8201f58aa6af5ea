use serde::Deserialize;
use std::path::PathBuf;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Environment
/// variables fill in anything the file leaves out.
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 3000
///
/// vapi:
///   api_key: "your-vapi-key"
///   phone_number_id: "your-phone-number-id"
///   webhook_url: "https://gateway.example.com/api/vapi/webhook"
///
/// gemini:
///   api_key: "your-gemini-key"
///   model: "gemini-1.5-flash"
///
/// reports:
///   dir: "/var/tmp/callsim-reports"
///   deterministic: true
///
/// security:
///   cors_allowed_origins: "*"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: Option<ServerYaml>,
    pub vapi: Option<VapiYaml>,
    pub gemini: Option<GeminiYaml>,
    pub reports: Option<ReportsYaml>,
    pub security: Option<SecurityYaml>,
}

/// Server configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYaml {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub tls_cert_path: Option<PathBuf>,
    pub tls_key_path: Option<PathBuf>,
    pub upstream_timeout_seconds: Option<u64>,
}

/// Call-platform configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct VapiYaml {
    pub api_key: Option<String>,
    pub phone_number_id: Option<String>,
    pub base_url: Option<String>,
    pub webhook_url: Option<String>,
}

/// Generative-text API configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeminiYaml {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
}

/// Report-writer configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ReportsYaml {
    pub dir: Option<PathBuf>,
    pub deterministic: Option<bool>,
}

/// Security configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SecurityYaml {
    pub cors_allowed_origins: Option<String>,
}
