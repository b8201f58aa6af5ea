//! Shared application state

use std::time::Duration;

use crate::config::ServerConfig;
use crate::notify::CallEvents;

/// State shared by every handler via `Arc`
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ServerConfig,
    /// Shared HTTP client; carries the outbound request deadline
    pub http: reqwest::Client,
    /// Broadcast channel for call lifecycle notifications
    pub events: CallEvents,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        // Builder failure means a broken TLS backend; refusing to start
        // beats serving without the configured deadline
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            config,
            http,
            events: CallEvents::new(),
        }
    }
}
