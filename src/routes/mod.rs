//! Route configuration
//!
//! Routers are grouped by concern: the JSON API, the platform webhook,
//! and the events WebSocket. The health route is wired directly in
//! `main` so it stays outside every middleware layer.

pub mod api;
pub mod events;
pub mod webhooks;
