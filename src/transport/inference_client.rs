//! Managed inference client transport
//!
//! Speaks the chat completions route of the Hugging Face Inference API:
//! `POST {base}/models/{model}/v1/chat/completions`.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, instrument};

use crate::{
    config::EndpointConfig,
    error::{ProbeError, TransportResult},
    probe::{Completion, ProbeRequest},
    transport::{
        bearer_json_headers,
        wire::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role, SYSTEM_PROMPT},
        CompletionTransport,
    },
};

/// Chat client for one hosted model
pub struct InferenceClientTransport {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl InferenceClientTransport {
    pub fn new(client: reqwest::Client, endpoint: &EndpointConfig) -> Self {
        Self {
            client,
            base_url: endpoint.api_url.clone(),
            timeout: endpoint.timeout,
        }
    }

    fn chat_url(&self, model: &str) -> String {
        format!("{}/models/{}/v1/chat/completions", self.base_url, model)
    }

    fn build_body(request: &ProbeRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: request.model.clone(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: request.prompt.clone(),
                },
            ],
            max_tokens: request.max_output_tokens,
            temperature: request.temperature(),
            do_sample: request.do_sample(),
            stream: false,
        }
    }
}

#[async_trait]
impl CompletionTransport for InferenceClientTransport {
    fn name(&self) -> &'static str {
        "Hugging Face Inference"
    }

    fn credential_var(&self) -> &'static str {
        "HF_TOKEN"
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
        let url = self.chat_url(&request.model);
        let body = Self::build_body(request);

        debug!(url = %url, messages = body.messages.len(), "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .headers(bearer_json_headers(credential)?)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Chat completion request failed");
                ProbeError::from_reqwest(e, self.timeout)
            })?;

        let status = response.status();
        debug!(status = %status, "Chat completion response status");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(status = %status, body = %text, "Inference API returned an error");
            return Err(ProbeError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ProbeError::from_reqwest(e, self.timeout))?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&text).map_err(|e| {
            error!(error = %e, body = %text, "Failed to parse chat completion response");
            ProbeError::from(e)
        })?;

        // A missing message is not an error, the probe just reports empty text
        Ok(Completion::new(parsed.first_content().unwrap_or_default()))
    }
}
