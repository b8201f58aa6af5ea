//! Events WebSocket route configuration
//!
//! # Endpoint
//!
//! `GET /ws/events` - WebSocket upgrade for live call notifications
//!
//! # Protocol
//!
//! The server pushes one JSON text frame per event:
//!
//! ```json
//! {"event": "call-ended", "callId": "..."}
//! ```
//!
//! Clients send nothing; inbound frames are ignored. Events published
//! before a client connects are not replayed.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::events::events_handler;
use crate::state::AppState;
use std::sync::Arc;

/// Create the events WebSocket router
pub fn create_events_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ws/events", get(events_handler))
        .layer(TraceLayer::new_for_http())
}
