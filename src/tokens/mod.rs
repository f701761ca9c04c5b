//! Token counting module
//!
//! Provides token counting for the `token-count` utility.

pub mod counter;

pub use counter::{read_text, TokenCounter, TokenizerSource, DEFAULT_HF_REPO};
