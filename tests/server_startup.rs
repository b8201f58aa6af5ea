//! Server Startup Tests
//!
//! Tests for server lifecycle, configuration loading, and startup
//! behavior. These verify the gateway boots and answers its liveness
//! probe without any provider credentials configured.

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::{Router, body::Body, http::Request};
use tokio::time::timeout;
use tower::util::ServiceExt;

use callsim_gateway::{ServerConfig, routes, state::AppState};

/// Helper function to create a minimal test configuration
fn create_minimal_config(port: u16) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port,
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

/// Find an available port for testing
fn find_available_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/health",
            axum::routing::get(callsim_gateway::handlers::api::health_check),
        )
        .merge(routes::api::create_api_router())
        .merge(routes::webhooks::create_webhook_router())
        .merge(routes::events::create_events_router())
        .with_state(state)
}

/// The server boots with no API keys and answers the health check
#[tokio::test]
async fn test_minimal_config_boot() {
    let port = find_available_port();
    let config = create_minimal_config(port);
    let app_state = Arc::new(AppState::new(config));
    let app = build_app(app_state);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"API is up and running.");
}

/// Unknown routes return 404
#[tokio::test]
async fn test_unknown_route_is_404() {
    let port = find_available_port();
    let app_state = Arc::new(AppState::new(create_minimal_config(port)));
    let app = build_app(app_state);

    let request = Request::builder()
        .uri("/api/nope")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

/// The server serves real TCP connections once bound
#[tokio::test]
async fn test_server_answers_over_tcp() {
    let port = find_available_port();
    let config = create_minimal_config(port);
    let app_state = Arc::new(AppState::new(config));
    let app = build_app(app_state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let body = timeout(Duration::from_secs(5), async {
        reqwest::get(format!("http://127.0.0.1:{port}/health"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap()
    })
    .await
    .expect("health check timed out");

    assert_eq!(body, "API is up and running.");
}
