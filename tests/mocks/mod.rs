//! Mock infrastructure for testing external services
//!
//! This module provides mock servers for the probed inference APIs:
//! - Hugging Face Inference API (chat completions)
//! - Together AI (text completions)

#![allow(dead_code)]

pub mod providers;

pub use providers::*;
