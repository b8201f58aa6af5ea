pub mod config;
pub mod core;
pub mod errors;
pub mod handlers;
pub mod notify;
pub mod prompts;
pub mod report;
pub mod routes;
pub mod state;

// Re-export commonly used items for convenience
pub use config::ServerConfig;
pub use errors::app_error::{AppError, AppResult};
pub use notify::{CallEvent, CallEvents};
pub use state::AppState;
