//! Configuration module for the Callsim Gateway
//!
//! Handles server configuration from .env files, YAML files, and
//! environment variables. Priority: YAML > ENV vars > .env values >
//! defaults.
//!
//! # Example
//! ```rust,no_run
//! use callsim_gateway::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable fallback
//! let config = ServerConfig::from_file(&PathBuf::from("config.yaml"))?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

mod yaml;

pub use yaml::YamlConfig;

/// Default Vapi API base URL
pub const DEFAULT_VAPI_BASE_URL: &str = "https://api.vapi.ai";

/// Default Gemini API base URL
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini model used for report generation
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Default per-request deadline for outbound API calls
pub const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 30;

/// Errors produced while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse configuration file {path}: {source}")]
    FileParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// TLS configuration for HTTPS
#[derive(Debug, Clone)]
pub struct TlsConfig {
    /// Path to the TLS certificate file (PEM format)
    pub cert_path: PathBuf,
    /// Path to the TLS private key file (PEM format)
    pub key_path: PathBuf,
}

/// Server configuration
///
/// Contains everything needed to run the gateway: bind address, call
/// platform credentials, generative-text API credentials, report-writer
/// settings, and security settings. API keys are optional at boot; the
/// call endpoint fails fast per request when the platform credentials
/// are absent.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // TLS configuration (optional)
    pub tls: Option<TlsConfig>,

    /// Vapi API key (Bearer token for assistant/call endpoints)
    pub vapi_api_key: Option<String>,
    /// Identifier of the outbound phone number registered with Vapi
    pub vapi_phone_number_id: Option<String>,
    /// Vapi API base URL; overridden in tests to point at a mock server
    pub vapi_base_url: String,
    /// Publicly reachable URL of this gateway's webhook endpoint,
    /// registered on each assistant as its `serverUrl`
    pub vapi_webhook_url: Option<String>,

    /// Gemini API key for report generation
    pub gemini_api_key: Option<String>,
    /// Gemini API base URL; overridden in tests
    pub gemini_base_url: String,
    /// Gemini model name used for report generation
    pub gemini_model: String,

    /// Directory report artifacts are written to (default: OS temp dir)
    pub report_dir: Option<PathBuf>,
    /// When set, the evaluation prompt asks the model for identical
    /// output given identical transcripts
    pub report_deterministic: bool,

    /// CORS allowed origins: `*`, a comma-separated list, or unset for
    /// same-origin only
    pub cors_allowed_origins: Option<String>,

    /// Deadline applied to every outbound API call, in seconds
    pub upstream_timeout_seconds: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::build(YamlConfig::default())
    }

    /// Load configuration from a YAML file, with environment variables
    /// filling in any fields the file leaves out
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let yaml: YamlConfig =
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::FileParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::build(yaml)
    }

    /// Merge YAML values over environment values over defaults
    fn build(yaml: YamlConfig) -> Result<Self, ConfigError> {
        let server = yaml.server.unwrap_or_default();
        let vapi = yaml.vapi.unwrap_or_default();
        let gemini = yaml.gemini.unwrap_or_default();
        let reports = yaml.reports.unwrap_or_default();
        let security = yaml.security.unwrap_or_default();

        let port = match server.port {
            Some(port) => port,
            None => parse_env_port("PORT", 3000)?,
        };

        let tls = match (
            server.tls_cert_path.or_else(|| env_path("TLS_CERT_PATH")),
            server.tls_key_path.or_else(|| env_path("TLS_KEY_PATH")),
        ) {
            (Some(cert_path), Some(key_path)) => Some(TlsConfig {
                cert_path,
                key_path,
            }),
            (None, None) => None,
            _ => {
                return Err(ConfigError::InvalidValue {
                    field: "tls".to_string(),
                    message: "both certificate and key paths are required".to_string(),
                });
            }
        };

        let upstream_timeout_seconds = match server.upstream_timeout_seconds {
            Some(secs) => secs,
            None => parse_env_u64("UPSTREAM_TIMEOUT_SECONDS", DEFAULT_UPSTREAM_TIMEOUT_SECONDS)?,
        };
        if upstream_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "upstream_timeout_seconds".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(ServerConfig {
            host: server
                .host
                .or_else(|| env_string("HOST"))
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            tls,
            vapi_api_key: vapi.api_key.or_else(|| env_string("VAPI_API_KEY")),
            vapi_phone_number_id: vapi
                .phone_number_id
                .or_else(|| env_string("VAPI_PHONE_NUMBER_ID")),
            vapi_base_url: vapi
                .base_url
                .or_else(|| env_string("VAPI_BASE_URL"))
                .unwrap_or_else(|| DEFAULT_VAPI_BASE_URL.to_string()),
            vapi_webhook_url: vapi.webhook_url.or_else(|| env_string("VAPI_WEBHOOK_URL")),
            gemini_api_key: gemini.api_key.or_else(|| env_string("GEMINI_API_KEY")),
            gemini_base_url: gemini
                .base_url
                .or_else(|| env_string("GEMINI_BASE_URL"))
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_model: gemini
                .model
                .or_else(|| env_string("GEMINI_MODEL"))
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            report_dir: reports.dir.or_else(|| env_path("REPORT_DIR")),
            report_deterministic: match reports.deterministic {
                Some(value) => value,
                None => parse_env_bool("REPORT_DETERMINISTIC", false)?,
            },
            cors_allowed_origins: security
                .cors_allowed_origins
                .or_else(|| env_string("CORS_ALLOWED_ORIGINS")),
            upstream_timeout_seconds,
        })
    }

    /// Bind address in `host:port` form
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether TLS is configured
    pub fn is_tls_enabled(&self) -> bool {
        self.tls.is_some()
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_path(name: &str) -> Option<PathBuf> {
    env_string(name).map(PathBuf::from)
}

fn parse_env_port(name: &str, default: u16) -> Result<u16, ConfigError> {
    match env_string(name) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            field: name.to_string(),
            message: format!("'{raw}' is not a valid port"),
        }),
        None => Ok(default),
    }
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match env_string(name) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            field: name.to_string(),
            message: format!("'{raw}' is not a valid integer"),
        }),
        None => Ok(default),
    }
}

fn parse_env_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match env_string(name) {
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                field: name.to_string(),
                message: format!("'{raw}' is not a valid boolean"),
            }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            "HOST",
            "PORT",
            "TLS_CERT_PATH",
            "TLS_KEY_PATH",
            "VAPI_API_KEY",
            "VAPI_PHONE_NUMBER_ID",
            "VAPI_BASE_URL",
            "VAPI_WEBHOOK_URL",
            "GEMINI_API_KEY",
            "GEMINI_BASE_URL",
            "GEMINI_MODEL",
            "REPORT_DIR",
            "REPORT_DETERMINISTIC",
            "CORS_ALLOWED_ORIGINS",
            "UPSTREAM_TIMEOUT_SECONDS",
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_without_env() {
        clear_env();
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.vapi_base_url, DEFAULT_VAPI_BASE_URL);
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert!(config.vapi_api_key.is_none());
        assert!(!config.report_deterministic);
        assert_eq!(
            config.upstream_timeout_seconds,
            DEFAULT_UPSTREAM_TIMEOUT_SECONDS
        );
        assert!(!config.is_tls_enabled());
    }

    #[test]
    #[serial]
    fn env_values_are_picked_up() {
        clear_env();
        std::env::set_var("PORT", "4010");
        std::env::set_var("VAPI_API_KEY", "vapi-secret");
        std::env::set_var("REPORT_DETERMINISTIC", "true");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 4010);
        assert_eq!(config.vapi_api_key.as_deref(), Some("vapi-secret"));
        assert!(config.report_deterministic);
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_port_is_rejected() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        let err = ServerConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        clear_env();
    }

    #[test]
    #[serial]
    fn yaml_wins_over_env() {
        clear_env();
        std::env::set_var("PORT", "4010");
        let yaml: YamlConfig = serde_yaml::from_str(
            "server:\n  port: 5020\nvapi:\n  base_url: \"http://localhost:9\"\n",
        )
        .unwrap();
        let config = ServerConfig::build(yaml).unwrap();
        assert_eq!(config.port, 5020);
        assert_eq!(config.vapi_base_url, "http://localhost:9");
        clear_env();
    }

    #[test]
    #[serial]
    fn tls_requires_both_paths() {
        clear_env();
        std::env::set_var("TLS_CERT_PATH", "/tmp/cert.pem");
        let err = ServerConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        clear_env();
    }
}
