//! Abstraction over the external text-generation provider.
//!
//! The relay depends only on [`TextGenerator`]; the concrete client is
//! constructed once at start-up and injected, so tests can swap in a stub.

use async_trait::async_trait;

use crate::prompt::SchedulePrompt;

/// Errors reported by a text-generation provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The request never produced an HTTP response (network, DNS, TLS, body decode).
    #[error("provider request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("provider API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider answered successfully but produced no text.
    #[error("provider returned no completion{}", .reason.as_deref().map(|r| format!(" ({r})")).unwrap_or_default())]
    EmptyResponse { reason: Option<String> },
}

/// A service that turns a prompt into free-form text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short provider/model label used in logs and the health endpoint.
    fn name(&self) -> &str;

    /// Send `prompt` and return the provider's raw text output.
    async fn generate(&self, prompt: &SchedulePrompt) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_response_message_includes_reason() {
        let err = ProviderError::EmptyResponse {
            reason: Some("SAFETY".into()),
        };
        assert_eq!(err.to_string(), "provider returned no completion (SAFETY)");

        let err = ProviderError::EmptyResponse { reason: None };
        assert_eq!(err.to_string(), "provider returned no completion");
    }

    #[test]
    fn api_error_message_carries_status_and_body() {
        let err = ProviderError::Api {
            status: 429,
            body: "quota exceeded".into(),
        };
        assert_eq!(err.to_string(), "provider API error (429): quota exceeded");
    }
}
