//! Latency probing
//!
//! Times single completion requests against hosted inference endpoints.

pub mod harness;
pub mod runner;
pub mod types;

pub use harness::probe;
pub use runner::{run_probes, targets_from_config, ProbeTarget};
pub use types::{
    Completion, ProbeOutcome, ProbeRequest, ProbeResult, GREEDY_TEMPERATURE, NO_RESPONSE_TEXT,
};
