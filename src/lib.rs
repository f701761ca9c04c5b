//! Inference Probe - latency probes for hosted text-generation APIs
//!
//! This library times single completion requests against a managed
//! inference API and a raw HTTP completions API, and renders the results.
//! It also carries the token counter behind the `token-count` utility.

pub mod config;
pub mod error;
pub mod logging;
pub mod probe;
pub mod report;
pub mod tokens;
pub mod transport;

pub use crate::config::{Config, EndpointConfig};
pub use crate::error::{ProbeError, ProbeErrorKind, TokenCountError};
pub use crate::probe::{probe, run_probes, ProbeOutcome, ProbeRequest, ProbeResult};
pub use crate::tokens::TokenCounter;
pub use crate::transport::{CompletionTransport, CompletionsTransport, InferenceClientTransport};
