use axum::{Router, routing::post};
use tower_http::trace::TraceLayer;

use crate::handlers::webhook;
use crate::state::AppState;
use std::sync::Arc;

/// Create the webhook router
///
/// No authentication: the call platform expects plain delivery
/// confirmation on this endpoint.
pub fn create_webhook_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/vapi/webhook", post(webhook::vapi_webhook))
        .layer(TraceLayer::new_for_http())
}
