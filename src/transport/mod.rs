//! Completion transports
//!
//! Defines the capability interface every probed endpoint implements so the
//! harness is written once and can run against stand-ins in tests.

pub mod completions;
pub mod inference_client;
pub mod wire;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::{ProbeError, TransportResult};
use crate::probe::{Completion, ProbeRequest};

pub use completions::CompletionsTransport;
pub use inference_client::InferenceClientTransport;

/// Trait defining how a probe reaches one provider
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// Provider name for reports and logs
    fn name(&self) -> &'static str;

    /// Environment variable that holds this provider's credential
    fn credential_var(&self) -> &'static str;

    /// Upper bound on a single call
    fn timeout(&self) -> Duration;

    /// Send one completion request and extract the first choice's text
    async fn issue_completion(
        &self,
        request: &ProbeRequest,
        credential: &str,
    ) -> TransportResult<Completion>;
}

/// Bearer auth and JSON content type, shared by both HTTP transports
pub(crate) fn bearer_json_headers(credential: &str) -> TransportResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    let auth = HeaderValue::from_str(&format!("Bearer {}", credential)).map_err(|_| {
        ProbeError::Other("credential contains characters not allowed in a header".to_string())
    })?;
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}
