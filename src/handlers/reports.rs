//! Scored report download endpoint

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Response;
use tracing::info;

use crate::core::calls;
use crate::errors::AppResult;
use crate::report;
use crate::state::AppState;

/// `GET /api/call-logs/{call_id}` - generate and download the scored
/// performance report for a call
///
/// Fetches the transcript from the platform (placeholder text when none
/// exists yet), runs it through the evaluation prompt, and returns the
/// result as a text attachment. The temporary artifact is deleted after
/// the send.
pub async fn download_report(
    State(state): State<Arc<AppState>>,
    Path(call_id): Path<String>,
) -> AppResult<Response> {
    let generated = calls::build_report(&state, &call_id).await?;
    let response = report::send_report(&state.config, &call_id, &generated).await?;
    info!(%call_id, "report download served");
    Ok(response)
}
