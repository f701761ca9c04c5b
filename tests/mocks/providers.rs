//! Mock inference providers for testing
//!
//! Provides wiremock-based mocks for the two probed APIs:
//! - POST /models/{model}/v1/chat/completions - Hugging Face Inference chat
//! - POST /v1/completions - Together AI text completions
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mocks::providers::MockCompletionsApi;
//!
//! #[tokio::test]
//! async fn test_with_completions_mock() {
//!     let api = MockCompletionsApi::start().await;
//!     api.mock_completion_success("Hello!").await;
//!
//!     // Use api.base_url() as TOGETHER_API_URL
//! }
//! ```

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use wiremock::{
    matchers::{header, header_exists, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Chat message in a mocked chat completion
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageMock {
    pub role: String,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatChoiceMock {
    pub index: u32,
    pub message: ChatMessageMock,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionResponseMock {
    pub id: String,
    pub object: String,
    pub model: String,
    pub choices: Vec<ChatChoiceMock>,
}

impl ChatCompletionResponseMock {
    pub fn with_content(model: &str, content: Option<&str>) -> Self {
        Self {
            id: "chatcmpl-test".to_string(),
            object: "chat.completion".to_string(),
            model: model.to_string(),
            choices: vec![ChatChoiceMock {
                index: 0,
                message: ChatMessageMock {
                    role: "assistant".to_string(),
                    content: content.map(String::from),
                },
                finish_reason: Some("length".to_string()),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionChoiceMock {
    pub index: u32,
    pub text: String,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionResponseMock {
    pub id: String,
    pub object: String,
    pub model: String,
    pub choices: Vec<CompletionChoiceMock>,
}

impl CompletionResponseMock {
    pub fn with_text(text: &str) -> Self {
        Self {
            id: "cmpl-test".to_string(),
            object: "text_completion".to_string(),
            model: "mistralai/Mistral-7B-Instruct-v0.2".to_string(),
            choices: vec![CompletionChoiceMock {
                index: 0,
                text: text.to_string(),
                finish_reason: Some("length".to_string()),
            }],
        }
    }
}

/// Request bodies a mock server received, decoded as JSON
async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.body_json::<Value>().expect("request body should be JSON"))
        .collect()
}

/// Mock Hugging Face Inference API server wrapper
pub struct MockInferenceApi {
    server: MockServer,
}

impl MockInferenceApi {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to configure as HF_API_URL
    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    fn chat_path(model: &str) -> String {
        format!("/models/{}/v1/chat/completions", model)
    }

    /// Mock a successful chat completion
    pub async fn mock_chat_success(&self, model: &str, content: Option<&str>) {
        let response = ChatCompletionResponseMock::with_content(model, content);
        Mock::given(method("POST"))
            .and(path(Self::chat_path(model)))
            .and(header_exists("Authorization"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response))
            .mount(&self.server)
            .await;
    }

    /// Mock a raw JSON body with the given status
    pub async fn mock_chat_raw(&self, model: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(Self::chat_path(model)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a chat completion that must never be requested
    pub async fn expect_no_calls(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn received_bodies(&self) -> Vec<Value> {
        received_bodies(&self.server).await
    }
}

/// Mock Together AI completions server wrapper
pub struct MockCompletionsApi {
    server: MockServer,
}

impl MockCompletionsApi {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to configure as TOGETHER_API_URL
    pub fn base_url(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    /// Mock a successful completion
    pub async fn mock_completion_success(&self, text: &str) {
        self.mock_completion_delayed(text, Duration::ZERO).await;
    }

    /// Mock a successful completion that answers after `delay`
    pub async fn mock_completion_delayed(&self, text: &str, delay: Duration) {
        let response = CompletionResponseMock::with_text(text);
        Mock::given(method("POST"))
            .and(path("/v1/completions"))
            .and(header_exists("Authorization"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(&response)
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a raw JSON body with the given status
    pub async fn mock_completion_raw(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/v1/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response whose body is not JSON
    pub async fn mock_completion_garbage(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&self.server)
            .await;
    }

    /// Mock a completion that must never be requested
    pub async fn expect_no_calls(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn received_bodies(&self) -> Vec<Value> {
        received_bodies(&self.server).await
    }
}
