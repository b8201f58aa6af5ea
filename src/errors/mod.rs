//! Error types shared across the gateway
//!
//! All request-level failures funnel into [`app_error::AppError`], which
//! renders the JSON error envelope expected by the web client.

pub mod app_error;

pub use app_error::{AppError, AppResult};
