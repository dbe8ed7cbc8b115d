//! Google Gemini client for schedule generation.
//!
//! Wraps the Gemini `generateContent` REST endpoint with [`reqwest`] and
//! exposes it through [`slate_core::provider::TextGenerator`].

pub mod api;
pub mod config;

pub use api::GeminiApi;
pub use config::{ConfigError, GeminiConfig};
