//! Configuration management for the latency probes
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Prompt sent to every endpoint when none is configured
pub const DEFAULT_PROMPT: &str = "Explain the concept of quantum entanglement in simple terms.";

/// Output token cap shared by both endpoints
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 50;

/// Request timeout applied to both transports unless overridden
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Settings for a single probed endpoint
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// API base URL (no trailing slash)
    pub api_url: String,
    /// Model identifier sent with each request
    pub model: String,
    /// Bearer credential; `None` skips the probe
    pub api_key: Option<String>,
    /// Upper bound on a single request
    pub timeout: Duration,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt shared by all probes
    pub prompt: String,
    /// Maximum number of tokens each endpoint may generate
    pub max_output_tokens: u32,

    /// Hugging Face Inference API (managed chat client)
    pub huggingface: EndpointConfig,
    /// Together AI completions API (raw HTTP)
    pub together: EndpointConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            prompt: env::var("PROBE_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string()),
            max_output_tokens: env::var("PROBE_MAX_TOKENS")
                .unwrap_or_else(|_| DEFAULT_MAX_OUTPUT_TOKENS.to_string())
                .parse()
                .context("Invalid PROBE_MAX_TOKENS")?,

            huggingface: EndpointConfig {
                api_url: trim_url(
                    env::var("HF_API_URL")
                        .unwrap_or_else(|_| "https://api-inference.huggingface.co".to_string()),
                ),
                model: env::var("HF_MODEL")
                    .unwrap_or_else(|_| "HuggingFaceH4/zephyr-7b-beta".to_string()),
                api_key: non_empty_var("HF_TOKEN"),
                timeout: timeout_var("HF_TIMEOUT_SECONDS")?,
            },

            together: EndpointConfig {
                api_url: trim_url(
                    env::var("TOGETHER_API_URL")
                        .unwrap_or_else(|_| "https://api.together.xyz/v1".to_string()),
                ),
                model: env::var("TOGETHER_MODEL")
                    .unwrap_or_else(|_| "mistralai/Mistral-7B-Instruct-v0.2".to_string()),
                api_key: non_empty_var("TOGETHER_API_KEY"),
                timeout: timeout_var("TOGETHER_TIMEOUT_SECONDS")?,
            },
        })
    }
}

/// An empty credential counts as unset, same as a missing one
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn timeout_var(name: &str) -> Result<Duration> {
    let secs: u64 = env::var(name)
        .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECONDS.to_string())
        .parse()
        .with_context(|| format!("Invalid {}", name))?;
    Ok(Duration::from_secs(secs))
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
