//! Inbound webhook from the call platform
//!
//! Single stateless endpoint. The platform expects delivery confirmation
//! only, so any payload carrying a discriminator is acknowledged with
//! 200 regardless of whether the event type is recognized.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::{info, warn};

use crate::notify::CallEvent;
use crate::state::AppState;

/// Terminal call status that triggers the call-ended broadcast
const STATUS_ENDED: &str = "ended";

/// `POST /api/vapi/webhook` - event notification intake
///
/// The discriminator lives at the top level or nested under `message`,
/// depending on the platform's server-message configuration; the event
/// fields live alongside whichever discriminator is present.
pub async fn vapi_webhook(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    let scope = event_scope(&body);
    let Some(event_type) = scope.get("type").and_then(Value::as_str) else {
        return (StatusCode::BAD_REQUEST, "Missing type in payload.").into_response();
    };

    match event_type {
        "end-of-call-report" => {
            info!(
                call_id = call_id(scope).unwrap_or("<unknown>"),
                summary = scope.get("summary").and_then(|v| v.as_str()),
                transcript = scope.get("transcript").and_then(|v| v.as_str()),
                "end of call report received"
            );
        }
        "status-update" => {
            let status = call_status(scope);
            info!(
                call_id = call_id(scope).unwrap_or("<unknown>"),
                status = status.unwrap_or("<unknown>"),
                "status update received"
            );
            if status == Some(STATUS_ENDED) {
                if let Some(id) = call_id(scope) {
                    state.events.publish(CallEvent::CallEnded {
                        call_id: id.to_string(),
                    });
                }
            }
        }
        other => {
            warn!(event_type = other, "unrecognized webhook type");
        }
    }

    (StatusCode::OK, "OK").into_response()
}

/// The object the event fields live on: `message` when the discriminator
/// is nested there, otherwise the top level
fn event_scope(body: &Value) -> &Value {
    match body.get("message") {
        Some(message) if message.get("type").and_then(Value::as_str).is_some() => message,
        _ => body,
    }
}

fn call_id(scope: &Value) -> Option<&str> {
    scope.get("call")?.get("id")?.as_str()
}

/// Status may sit beside the discriminator or on the call object
fn call_status(scope: &Value) -> Option<&str> {
    scope
        .get("status")
        .and_then(Value::as_str)
        .or_else(|| scope.get("call")?.get("status")?.as_str())
}
