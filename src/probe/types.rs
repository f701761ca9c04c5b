//! Data carried through a single probe

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{ProbeError, ProbeErrorKind};

/// Sampling temperature sent when the request is deterministic
pub const GREEDY_TEMPERATURE: f32 = 0.0;

/// Provider-side default, used only for non-deterministic requests
const DEFAULT_TEMPERATURE: f32 = 1.0;

/// Placeholder reported when a completion response has no generated text
pub const NO_RESPONSE_TEXT: &str = "No response text";

/// One completion request aimed at one endpoint
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    pub prompt: String,
    pub model: String,
    /// Bearer credential; `None` means the probe is skipped
    pub credential: Option<String>,
    pub max_output_tokens: u32,
    deterministic: bool,
}

impl ProbeRequest {
    /// Create a greedy (deterministic) request so repeated probes stay comparable
    pub fn new(
        prompt: impl Into<String>,
        model: impl Into<String>,
        credential: Option<String>,
        max_output_tokens: u32,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            credential,
            max_output_tokens,
            deterministic: true,
        }
    }

    pub fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    /// Temperature to put on the wire
    pub fn temperature(&self) -> f32 {
        if self.deterministic {
            GREEDY_TEMPERATURE
        } else {
            DEFAULT_TEMPERATURE
        }
    }

    /// Whether the endpoint may sample (false means greedy decoding)
    pub fn do_sample(&self) -> bool {
        !self.deterministic
    }
}

/// Generated text extracted from the first choice of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Measured result of a probe that was actually attempted
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeResult {
    Success {
        generated_text: String,
        latency_seconds: f64,
    },
    Failure {
        kind: ProbeErrorKind,
        error_message: String,
        elapsed_seconds: f64,
    },
}

impl ProbeResult {
    pub fn failure(err: &ProbeError, elapsed_seconds: f64) -> Self {
        ProbeResult::Failure {
            kind: err.kind(),
            error_message: err.to_string(),
            elapsed_seconds,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProbeResult::Success { .. })
    }

    /// Wall-clock seconds, whichever path the probe took
    pub fn elapsed_seconds(&self) -> f64 {
        match self {
            ProbeResult::Success {
                latency_seconds, ..
            } => *latency_seconds,
            ProbeResult::Failure {
                elapsed_seconds, ..
            } => *elapsed_seconds,
        }
    }
}

/// What happened to one configured endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// No credential was configured, nothing was sent
    Skipped {
        endpoint: String,
        credential_var: String,
    },
    Finished {
        endpoint: String,
        model: String,
        prompt: String,
        trace_id: String,
        started_at: DateTime<Utc>,
        result: ProbeResult,
    },
}

impl ProbeOutcome {
    pub fn endpoint(&self) -> &str {
        match self {
            ProbeOutcome::Skipped { endpoint, .. } | ProbeOutcome::Finished { endpoint, .. } => {
                endpoint
            }
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ProbeOutcome::Skipped { .. })
    }

    pub fn result(&self) -> Option<&ProbeResult> {
        match self {
            ProbeOutcome::Skipped { .. } => None,
            ProbeOutcome::Finished { result, .. } => Some(result),
        }
    }
}
