//! Logging setup and per-probe tracing context
//!
//! Log output goes to stderr so the report on stdout stays clean.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ProbeError;

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` overrides `default_filter`. Set `LOG_FORMAT=json` for
/// line-delimited JSON logs.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Context for tracking one probe through the logs
#[derive(Debug, Clone)]
pub struct ProbeContext {
    /// Short identifier for log correlation
    pub trace_id: String,
    pub endpoint: String,
    pub model: String,
}

impl ProbeContext {
    pub fn new(endpoint: &str, model: &str) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(), // Short ID for readability
            endpoint: endpoint.to_string(),
            model: model.to_string(),
        }
    }

    pub fn log_probe_start(&self, prompt_chars: usize, max_output_tokens: u32) {
        info!(
            trace_id = %self.trace_id,
            endpoint = %self.endpoint,
            model = %self.model,
            prompt_chars = %prompt_chars,
            max_output_tokens = %max_output_tokens,
            "Probe started"
        );
    }

    pub fn log_probe_success(&self, latency_seconds: f64, generated_chars: usize) {
        info!(
            trace_id = %self.trace_id,
            endpoint = %self.endpoint,
            model = %self.model,
            latency_seconds = %latency_seconds,
            generated_chars = %generated_chars,
            "Probe completed"
        );
    }

    pub fn log_probe_failure(&self, err: &ProbeError, elapsed_seconds: f64) {
        warn!(
            trace_id = %self.trace_id,
            endpoint = %self.endpoint,
            model = %self.model,
            kind = ?err.kind(),
            error = %err,
            elapsed_seconds = %elapsed_seconds,
            "Probe failed"
        );
    }

    pub fn log_probe_skipped(endpoint: &str, credential_var: &str) {
        debug!(
            endpoint = %endpoint,
            credential_var = %credential_var,
            "Credential not set, probe skipped"
        );
    }
}
