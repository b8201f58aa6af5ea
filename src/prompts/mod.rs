//! Versioned prompt assets
//!
//! The persona script, the platform-side analysis prompt, and the
//! evaluation report template are embedded once at compile time and
//! referenced by name. Nothing in the request path inlines prompt text.

/// Persona script driving the simulated customer during the call
pub const CUSTOMER_PERSONA: &str = include_str!("persona.txt");

/// Analysis prompt registered on the assistant; the call platform runs
/// it against the transcript when the call ends
pub const ANALYSIS_SUMMARY_PROMPT: &str = include_str!("analysis_summary.txt");

/// Template for the downloadable performance report; the transcript is
/// substituted into the delimited block
const EVALUATION_REPORT_TEMPLATE: &str = include_str!("evaluation_report.txt");

/// Placeholder used when the platform has no transcript for a call yet
pub const TRANSCRIPT_PLACEHOLDER: &str = "Transcript not available yet.";

/// Appended to the evaluation prompt when deterministic reports are
/// configured; the two original prompt variants disagreed on this, so it
/// is an explicit setting rather than baked-in wording
const DETERMINISM_CLAUSE: &str =
    "\nAlways produce identical output for identical transcripts: do not vary \
wording, scores, or formatting between runs.\n";

/// Render the evaluation prompt for a transcript.
///
/// The transcript is embedded verbatim. When `deterministic` is set the
/// prompt additionally asks the model for repeatable output.
pub fn evaluation_prompt(transcript: &str, deterministic: bool) -> String {
    let mut prompt = EVALUATION_REPORT_TEMPLATE.replace("{transcript}", transcript);
    if deterministic {
        prompt.push_str(DETERMINISM_CLAUSE);
    }
    prompt
}
