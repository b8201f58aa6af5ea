//! HTTP and WebSocket request handlers
//!
//! - `api` - Health check endpoint
//! - `calls` - Call start and summary endpoints
//! - `events` - WebSocket push of call lifecycle notifications
//! - `reports` - Scored report download endpoint
//! - `webhook` - Inbound event notifications from the call platform

pub mod api;
pub mod calls;
pub mod events;
pub mod reports;
pub mod webhook;
