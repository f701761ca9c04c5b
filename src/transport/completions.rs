//! Raw HTTP completions transport
//!
//! Posts directly to an OpenAI-compatible `/completions` endpoint
//! (Together AI by default).

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, instrument};

use crate::{
    config::EndpointConfig,
    error::{ProbeError, TransportResult},
    probe::{Completion, ProbeRequest, NO_RESPONSE_TEXT},
    transport::{
        bearer_json_headers,
        wire::{CompletionRequest, CompletionResponse},
        CompletionTransport,
    },
};

/// Completions client for a single endpoint
pub struct CompletionsTransport {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl CompletionsTransport {
    pub fn new(client: reqwest::Client, endpoint: &EndpointConfig) -> Self {
        Self {
            client,
            base_url: endpoint.api_url.clone(),
            timeout: endpoint.timeout,
        }
    }

    fn build_body(request: &ProbeRequest) -> CompletionRequest {
        CompletionRequest {
            model: request.model.clone(),
            prompt: request.prompt.clone(),
            max_tokens: request.max_output_tokens,
            temperature: request.temperature(),
        }
    }
}

#[async_trait]
impl CompletionTransport for CompletionsTransport {
    fn name(&self) -> &'static str {
        "Together AI"
    }

    fn credential_var(&self) -> &'static str {
        "TOGETHER_API_KEY"
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    #[instrument(skip(self, request, credential), fields(model = %request.model))]
    async fn issue_completion(
        &self,
        request: &ProbeRequest,
        credential: &str,
    ) -> TransportResult<Completion> {
        let url = format!("{}/completions", self.base_url);
        let body = Self::build_body(request);

        debug!(url = %url, max_tokens = body.max_tokens, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .headers(bearer_json_headers(credential)?)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Completion request failed");
                ProbeError::from_reqwest(e, self.timeout)
            })?;

        let status = response.status();
        debug!(status = %status, "Completion response status");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(status = %status, body = %text, "Completion endpoint returned an error");
            return Err(ProbeError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ProbeError::from_reqwest(e, self.timeout))?;
        let parsed: CompletionResponse = serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, body = %text, "Failed to parse completion response");
            ProbeError::from(e)
        })?;

        Ok(Completion::new(
            parsed.first_text().unwrap_or(NO_RESPONSE_TEXT),
        ))
    }
}
