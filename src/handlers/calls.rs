//! Call start and summary endpoints

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use tracing::info;

use crate::core::calls::{self, CallRequest};
use crate::errors::AppResult;
use crate::state::AppState;

/// `POST /api/call` - create an assistant and start a simulated call
///
/// Returns `{success, assistantId, callId}` once the platform accepted
/// the call. Validation failures return 400 before any outbound call;
/// missing credentials and upstream failures return 500.
pub async fn start_call(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CallRequest>,
) -> AppResult<Json<Value>> {
    let started = calls::start_simulated_call(&state, request).await?;
    Ok(Json(json!({
        "success": true,
        "assistantId": started.assistant_id,
        "callId": started.call_id,
    })))
}

/// `GET /api/summary/{call_id}` - platform-computed summary of a call
///
/// 404 while post-call analysis has not produced a summary yet; that is
/// a retry-later signal, not a failure.
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(call_id): Path<String>,
) -> AppResult<Json<Value>> {
    let summary = calls::fetch_summary(&state, &call_id).await?;
    info!(%call_id, "summary served");
    Ok(Json(json!({
        "success": true,
        "summary": summary,
    })))
}
