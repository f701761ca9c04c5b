//! Runs the configured probes and collects their outcomes

use std::sync::Arc;

use futures::future::join_all;
use tracing::info;

use crate::config::Config;
use crate::probe::harness::probe;
use crate::probe::types::{ProbeOutcome, ProbeRequest};
use crate::transport::{CompletionTransport, CompletionsTransport, InferenceClientTransport};

/// One endpoint to probe
pub struct ProbeTarget {
    pub request: ProbeRequest,
    pub transport: Arc<dyn CompletionTransport>,
}

impl ProbeTarget {
    pub fn new(request: ProbeRequest, transport: Arc<dyn CompletionTransport>) -> Self {
        Self { request, transport }
    }
}

/// Build the managed-client and raw-HTTP targets, in that order
pub fn targets_from_config(config: &Config, client: reqwest::Client) -> Vec<ProbeTarget> {
    let huggingface = ProbeTarget::new(
        ProbeRequest::new(
            config.prompt.clone(),
            config.huggingface.model.clone(),
            config.huggingface.api_key.clone(),
            config.max_output_tokens,
        ),
        Arc::new(InferenceClientTransport::new(
            client.clone(),
            &config.huggingface,
        )),
    );

    let together = ProbeTarget::new(
        ProbeRequest::new(
            config.prompt.clone(),
            config.together.model.clone(),
            config.together.api_key.clone(),
            config.max_output_tokens,
        ),
        Arc::new(CompletionsTransport::new(client, &config.together)),
    );

    vec![huggingface, together]
}

/// Probe every target
///
/// Sequential by default, so total wall time is the sum of the latencies.
/// With `parallel` the probes overlap. Outcomes always come back in target
/// order, and a failing probe never stops the others.
pub async fn run_probes(targets: &[ProbeTarget], parallel: bool) -> Vec<ProbeOutcome> {
    info!(targets = targets.len(), parallel, "Running latency probes");

    if parallel {
        return join_all(
            targets
                .iter()
                .map(|t| probe(&t.request, t.transport.as_ref())),
        )
        .await;
    }

    let mut outcomes = Vec::with_capacity(targets.len());
    for target in targets {
        outcomes.push(probe(&target.request, target.transport.as_ref()).await);
    }
    outcomes
}
