//! Human-readable and JSON rendering of probe outcomes
//!
//! Measurement lives in [`crate::probe`]; this module only turns outcomes
//! into text.

use crate::error::ProbeErrorKind;
use crate::probe::{ProbeOutcome, ProbeResult};

/// Characters of generated text shown in the text report
pub const PREVIEW_CHARS: usize = 100;

pub const RUN_HEADER: &str = "--- Running Latency Probes ---";
pub const RUN_FOOTER: &str = "--- Latency Probes Complete ---";

/// First `max_chars` characters of `text` (never splits a code point)
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Render one outcome as the block printed for it
pub fn render_outcome(outcome: &ProbeOutcome) -> String {
    match outcome {
        ProbeOutcome::Skipped {
            endpoint,
            credential_var,
        } => format!(
            "{endpoint} credential ({credential_var}) not set. Skipping {endpoint} probe.\n"
        ),
        ProbeOutcome::Finished {
            endpoint,
            model,
            prompt,
            result,
            ..
        } => {
            let mut out = format!("\n--- {endpoint} API ({model}) ---\n");
            match result {
                ProbeResult::Success {
                    generated_text,
                    latency_seconds,
                } => {
                    out.push_str(&format!("Prompt: '{prompt}'\n"));
                    out.push_str(&format!(
                        "Response (first {PREVIEW_CHARS} chars): '{}...'\n",
                        preview(generated_text, PREVIEW_CHARS)
                    ));
                    out.push_str(&format!("Latency: {latency_seconds:.2} seconds\n"));
                }
                ProbeResult::Failure {
                    kind: ProbeErrorKind::Timeout,
                    elapsed_seconds,
                    ..
                } => {
                    out.push_str(&format!(
                        "Error: {endpoint} API call timed out after {elapsed_seconds:.2} seconds.\n"
                    ));
                }
                ProbeResult::Failure {
                    kind: ProbeErrorKind::Other,
                    error_message,
                    elapsed_seconds,
                } => {
                    out.push_str(&format!(
                        "An unexpected error occurred with {endpoint}: {error_message}\n"
                    ));
                    out.push_str(&format!("Time to error: {elapsed_seconds:.2} seconds\n"));
                }
                ProbeResult::Failure {
                    error_message,
                    elapsed_seconds,
                    ..
                } => {
                    out.push_str(&format!("Error during {endpoint} call: {error_message}\n"));
                    out.push_str(&format!("Time to error: {elapsed_seconds:.2} seconds\n"));
                }
            }
            out
        }
    }
}

/// Full text report, banner included
pub fn render_report(outcomes: &[ProbeOutcome]) -> String {
    let mut out = format!("{RUN_HEADER}\n");
    for outcome in outcomes {
        out.push_str(&render_outcome(outcome));
    }
    out.push_str(&format!("\n{RUN_FOOTER}\n"));
    out
}

/// One JSON object per outcome, one per line
pub fn render_json_lines(outcomes: &[ProbeOutcome]) -> serde_json::Result<String> {
    let mut out = String::new();
    for outcome in outcomes {
        out.push_str(&serde_json::to_string(outcome)?);
        out.push('\n');
    }
    Ok(out)
}
