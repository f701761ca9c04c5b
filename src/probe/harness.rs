//! Latency probe harness
//!
//! Times exactly one completion call per probe. The harness never prints;
//! formatting is left to [`crate::report`].

use std::time::Instant;

use chrono::Utc;

use crate::error::ProbeError;
use crate::logging::ProbeContext;
use crate::probe::types::{ProbeOutcome, ProbeRequest, ProbeResult};
use crate::transport::CompletionTransport;

/// Run one probe against `transport`
///
/// A request without a credential is skipped and the transport is never
/// called. Otherwise elapsed time is measured around the single call, on
/// the success and the failure path alike. The call is cut off once
/// `transport.timeout()` has passed.
pub async fn probe<T>(request: &ProbeRequest, transport: &T) -> ProbeOutcome
where
    T: CompletionTransport + ?Sized,
{
    let Some(credential) = request.credential.as_deref() else {
        ProbeContext::log_probe_skipped(transport.name(), transport.credential_var());
        return ProbeOutcome::Skipped {
            endpoint: transport.name().to_string(),
            credential_var: transport.credential_var().to_string(),
        };
    };

    let ctx = ProbeContext::new(transport.name(), &request.model);
    let started_at = Utc::now();

    let result = if request.prompt.trim().is_empty() {
        let err = ProbeError::Other("prompt must not be empty".to_string());
        ctx.log_probe_failure(&err, 0.0);
        ProbeResult::failure(&err, 0.0)
    } else {
        ctx.log_probe_start(request.prompt.chars().count(), request.max_output_tokens);
        timed_call(request, credential, transport, &ctx).await
    };

    ProbeOutcome::Finished {
        endpoint: transport.name().to_string(),
        model: request.model.clone(),
        prompt: request.prompt.clone(),
        trace_id: ctx.trace_id,
        started_at,
        result,
    }
}

async fn timed_call<T>(
    request: &ProbeRequest,
    credential: &str,
    transport: &T,
    ctx: &ProbeContext,
) -> ProbeResult
where
    T: CompletionTransport + ?Sized,
{
    let limit = transport.timeout();

    let start = Instant::now();
    let outcome = tokio::time::timeout(limit, transport.issue_completion(request, credential)).await;
    let elapsed = start.elapsed().as_secs_f64();

    let outcome = match outcome {
        Ok(inner) => inner,
        Err(_) => Err(ProbeError::Timeout(limit)),
    };

    match outcome {
        Ok(completion) => {
            ctx.log_probe_success(elapsed, completion.text.chars().count());
            ProbeResult::Success {
                generated_text: completion.text,
                latency_seconds: elapsed,
            }
        }
        Err(err) => {
            ctx.log_probe_failure(&err, elapsed);
            ProbeResult::failure(&err, elapsed)
        }
    }
}
