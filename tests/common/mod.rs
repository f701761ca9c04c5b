//! Common test utilities
//!
//! Shared constants and configuration builders for the integration tests.

#![allow(dead_code)]

use std::time::Duration;

use inference_probe::{Config, EndpointConfig};

/// Test configuration constants
pub mod constants {
    pub const TEST_HF_TOKEN: &str = "hf_test_token";
    pub const TEST_TOGETHER_KEY: &str = "test-together-key";
    pub const HF_MODEL: &str = "HuggingFaceH4/zephyr-7b-beta";
    pub const TOGETHER_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";
    pub const PROMPT: &str = "Explain the concept of quantum entanglement in simple terms.";
}

/// Endpoint pointing at a mock server
pub fn endpoint(api_url: &str, model: &str, api_key: Option<&str>) -> EndpointConfig {
    EndpointConfig {
        api_url: api_url.to_string(),
        model: model.to_string(),
        api_key: api_key.map(String::from),
        timeout: Duration::from_secs(10),
    }
}

/// Config with both endpoints pointing at mock servers
pub fn config(huggingface: EndpointConfig, together: EndpointConfig) -> Config {
    Config {
        prompt: constants::PROMPT.to_string(),
        max_output_tokens: 50,
        huggingface,
        together,
    }
}

/// Address nothing listens on
pub fn unreachable_url() -> String {
    "http://127.0.0.1:9".to_string()
}
