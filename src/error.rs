//! Error types for the latency probes
//!
//! Every failure a transport can produce is folded into [`ProbeError`], a
//! closed set of kinds with one residual `Other` case.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Errors raised while issuing a single completion request
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

/// Discriminant of [`ProbeError`], carried on failed results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeErrorKind {
    Timeout,
    HttpStatus,
    Transport,
    Decode,
    Other,
}

impl ProbeError {
    pub fn kind(&self) -> ProbeErrorKind {
        match self {
            ProbeError::Timeout(_) => ProbeErrorKind::Timeout,
            ProbeError::HttpStatus { .. } => ProbeErrorKind::HttpStatus,
            ProbeError::Transport(_) => ProbeErrorKind::Transport,
            ProbeError::Decode(_) => ProbeErrorKind::Decode,
            ProbeError::Other(_) => ProbeErrorKind::Other,
        }
    }

    /// Classify a reqwest failure, given the timeout the client was built with
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ProbeError::Timeout(timeout)
        } else if err.is_decode() {
            ProbeError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ProbeError::HttpStatus {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            ProbeError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::Decode(err.to_string())
    }
}

/// Errors raised by the token counting utility
#[derive(Debug, Error)]
pub enum TokenCountError {
    #[error("File '{0}' not found.")]
    FileNotFound(String),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load tokenizer: {0}")]
    Tokenizer(String),

    #[error("failed to fetch tokenizer from the Hub: {0}")]
    Hub(String),

    #[error("failed to encode text: {0}")]
    Encode(String),
}

/// Result type alias for convenience
pub type TransportResult<T> = Result<T, ProbeError>;
