//! Events Socket Tests
//!
//! End-to-end test of the live notification channel: a WebSocket client
//! attached to `/ws/events` observes the `call-ended` broadcast produced
//! by a webhook status update.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use futures_util::StreamExt;
use serde_json::{Value, json};
use tokio::time::timeout;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use callsim_gateway::{ServerConfig, routes, state::AppState};

fn create_test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        tls: None,
        vapi_api_key: None,
        vapi_phone_number_id: None,
        vapi_base_url: "http://localhost:9".to_string(),
        vapi_webhook_url: None,
        gemini_api_key: None,
        gemini_base_url: "http://localhost:9".to_string(),
        gemini_model: "gemini-1.5-flash".to_string(),
        report_dir: None,
        report_deterministic: false,
        cors_allowed_origins: None,
        upstream_timeout_seconds: 5,
    }
}

/// A connected listener receives the call-ended event pushed by the webhook
#[tokio::test]
async fn test_connected_listener_receives_call_ended() {
    let state = Arc::new(AppState::new(create_test_config()));
    let app = Router::new()
        .merge(routes::webhooks::create_webhook_router())
        .merge(routes::events::create_events_router())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let (mut socket, _) = connect_async(format!("ws://{addr}/ws/events"))
        .await
        .expect("WebSocket connect failed");

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://{addr}/api/vapi/webhook"))
        .json(&json!({"message": {"type": "status-update", "status": "ended", "call": {"id": "c1"}}}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let frame = timeout(Duration::from_secs(5), socket.next())
        .await
        .expect("no event frame within deadline")
        .expect("socket closed")
        .expect("socket error");

    let Message::Text(text) = frame else {
        panic!("expected a text frame, got {frame:?}");
    };
    let event: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(event["event"], "call-ended");
    assert_eq!(event["callId"], "c1");
}

/// Listeners that connect after an event fired see nothing (no replay)
#[tokio::test]
async fn test_late_listener_sees_no_replay() {
    let state = Arc::new(AppState::new(create_test_config()));
    let app = Router::new()
        .merge(routes::webhooks::create_webhook_router())
        .merge(routes::events::create_events_router())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    client
        .post(format!("http://{addr}/api/vapi/webhook"))
        .json(&json!({"type": "status-update", "call": {"id": "early", "status": "ended"}}))
        .send()
        .await
        .unwrap();

    let (mut socket, _) = connect_async(format!("ws://{addr}/ws/events"))
        .await
        .expect("WebSocket connect failed");

    let result = timeout(Duration::from_millis(500), socket.next()).await;
    assert!(result.is_err(), "late listener should receive no replay");
}
