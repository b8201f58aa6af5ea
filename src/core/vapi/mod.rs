//! Vapi call-platform integration
//!
//! The platform owns the call lifecycle; this module only creates
//! assistants, starts calls, and reads call metadata back.

mod client;
pub mod messages;
pub mod voices;

pub use client::VapiClient;
pub use voices::{ALLOWED_VOICE_IDS, DEFAULT_VOICE_ID, resolve_voice_id};
