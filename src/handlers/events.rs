//! WebSocket push of call lifecycle notifications
//!
//! Each connection subscribes to the broadcast channel and receives every
//! event published while it is attached, serialized as JSON text frames.
//! The channel is publish-only: inbound client frames are drained and
//! ignored.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};
use tokio::select;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// `GET /ws/events` - WebSocket upgrade for live call notifications
pub async fn events_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_events_socket(socket, state))
}

async fn handle_events_socket(socket: WebSocket, state: Arc<AppState>) {
    info!("event socket connected");
    let mut events = state.events.subscribe();
    let (mut sender, mut receiver) = socket.split();

    loop {
        select! {
            event = events.recv() => {
                match event {
                    Ok(event) => {
                        let frame = match serde_json::to_string(&event) {
                            Ok(json) => json,
                            Err(err) => {
                                warn!(%err, "failed to serialize event");
                                continue;
                            }
                        };
                        if sender.send(Message::Text(frame.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        // No replay and no delivery guarantee; just note the gap
                        warn!(skipped, "event socket lagged behind the broadcast");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            frame = receiver.next() => {
                match frame {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(other)) => {
                        // Publish-only channel; inbound frames are ignored
                        debug!(?other, "ignoring inbound frame on event socket");
                    }
                }
            }
        }
    }

    info!("event socket disconnected");
}
