//! Gemini generative-text integration

mod client;
pub mod messages;

pub use client::GeminiClient;
