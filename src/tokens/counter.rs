//! Token counter implementation
//!
//! Counts tokens either with a Hugging Face `tokenizer.json` (local file or
//! fetched from the Hub) or with a tiktoken BPE chosen by model name.

use std::path::{Path, PathBuf};

use tiktoken_rs::{get_bpe_from_model, CoreBPE};
use tracing::{debug, info, warn};

use crate::error::TokenCountError;

/// Hub repository used when no repo is named explicitly
pub const DEFAULT_HF_REPO: &str = "mistralai/Mistral-7B-Instruct-v0.2";

/// Encoder used when tiktoken doesn't know the requested model
const FALLBACK_MODEL: &str = "gpt-4";

const TOKENIZER_FILE: &str = "tokenizer.json";

/// Where a tokenizer comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerSource {
    /// tiktoken encoding for an OpenAI-style model name
    Tiktoken { model: String },
    /// Local `tokenizer.json`
    File(PathBuf),
    /// `tokenizer.json` from a Hub model repository
    Hub { repo: String, token: Option<String> },
}

enum Encoder {
    Bpe(CoreBPE),
    HuggingFace(Box<tokenizers::Tokenizer>),
}

/// Token counter bound to one tokenizer
pub struct TokenCounter {
    encoder: Encoder,
}

impl TokenCounter {
    pub fn load(source: &TokenizerSource) -> Result<Self, TokenCountError> {
        match source {
            TokenizerSource::Tiktoken { model } => Self::for_model(model),
            TokenizerSource::File(path) => Self::from_file(path),
            TokenizerSource::Hub { repo, token } => Self::from_hub(repo, token.clone()),
        }
    }

    /// tiktoken encoder for `model`, falling back to the gpt-4 encoding
    pub fn for_model(model: &str) -> Result<Self, TokenCountError> {
        let bpe = match get_bpe_from_model(model) {
            Ok(bpe) => bpe,
            Err(e) => {
                warn!(
                    "Unknown model '{}', falling back to {} encoder: {}",
                    model, FALLBACK_MODEL, e
                );
                get_bpe_from_model(FALLBACK_MODEL)
                    .map_err(|e| TokenCountError::Tokenizer(e.to_string()))?
            }
        };
        Ok(Self {
            encoder: Encoder::Bpe(bpe),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, TokenCountError> {
        debug!(path = %path.display(), "Loading tokenizer file");
        let tokenizer = tokenizers::Tokenizer::from_file(path).map_err(|e| {
            TokenCountError::Tokenizer(format!("{}: {}", path.display(), e))
        })?;
        Ok(Self {
            encoder: Encoder::HuggingFace(Box::new(tokenizer)),
        })
    }

    /// Download (or reuse the cached) `tokenizer.json` of `repo`
    pub fn from_hub(repo: &str, token: Option<String>) -> Result<Self, TokenCountError> {
        info!(repo = %repo, "Fetching tokenizer from the Hub");
        let api = hf_hub::api::sync::ApiBuilder::new()
            .with_token(token)
            .build()
            .map_err(|e| TokenCountError::Hub(format!("HF Hub API init failed: {e}")))?;
        let path = api
            .model(repo.to_string())
            .get(TOKENIZER_FILE)
            .map_err(|e| TokenCountError::Hub(format!("{repo}/{TOKENIZER_FILE}: {e}")))?;
        Self::from_file(&path)
    }

    /// Count tokens in `text`, special tokens included
    pub fn count_tokens(&self, text: &str) -> Result<usize, TokenCountError> {
        match &self.encoder {
            Encoder::Bpe(bpe) => Ok(bpe.encode_with_special_tokens(text).len()),
            Encoder::HuggingFace(tokenizer) => tokenizer
                .encode(text, true)
                .map(|encoding| encoding.get_ids().len())
                .map_err(|e| TokenCountError::Encode(e.to_string())),
        }
    }
}

/// Read a UTF-8 text file, reporting a missing file distinctly
pub fn read_text(path: &Path) -> Result<String, TokenCountError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            TokenCountError::FileNotFound(path.display().to_string())
        } else {
            TokenCountError::Io {
                path: path.display().to_string(),
                source,
            }
        }
    })
}
