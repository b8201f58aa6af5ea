//! Health check endpoint

/// `GET /health` - plain-text liveness probe
pub async fn health_check() -> &'static str {
    "API is up and running."
}
