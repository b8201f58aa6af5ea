use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{calls, reports};
use crate::state::AppState;
use std::sync::Arc;

/// Create the JSON API router
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/call", post(calls::start_call))
        .route("/api/summary/{call_id}", get(calls::get_summary))
        .route("/api/call-logs/{call_id}", get(reports::download_report))
        .layer(TraceLayer::new_for_http())
}
