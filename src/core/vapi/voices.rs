//! Voice selection for the simulated customer
//!
//! The call platform exposes a fixed set of first-party voices. Anything
//! outside the allow-list (or an absent selection) falls back to the
//! default.

/// Voices accepted by the platform's `vapi` voice provider
pub const ALLOWED_VOICE_IDS: &[&str] = &[
    "Elliot", "Kylie", "Rohan", "Lily", "Savannah", "Hana", "Neha", "Cole", "Harry", "Paige",
    "Spencer",
];

/// Voice used when the caller picks nothing, or something unknown
pub const DEFAULT_VOICE_ID: &str = "Rohan";

/// Resolve a caller-supplied voice id against the allow-list
pub fn resolve_voice_id(requested: Option<&str>) -> &'static str {
    requested
        .and_then(|id| ALLOWED_VOICE_IDS.iter().find(|allowed| **allowed == id))
        .copied()
        .unwrap_or(DEFAULT_VOICE_ID)
}
