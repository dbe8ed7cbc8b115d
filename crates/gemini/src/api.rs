//! REST client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use slate_core::prompt::SchedulePrompt;
use slate_core::provider::{ProviderError, TextGenerator};

use crate::config::GeminiConfig;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for one Gemini model.
pub struct GeminiApi {
    client: reqwest::Client,
    config: GeminiConfig,
    label: String,
}

/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response held no candidate text.
    #[error("Gemini returned no text")]
    EmptyResponse { block_reason: Option<String> },
}

impl From<GeminiError> for ProviderError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Request(e) => ProviderError::Transport(e.to_string()),
            GeminiError::ApiError { status, body } => ProviderError::Api { status, body },
            GeminiError::EmptyResponse { block_reason } => ProviderError::EmptyResponse {
                reason: block_reason,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub role: &'static str,
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// Build a single-turn user request carrying `parts` in order.
pub fn build_request<'a>(parts: &[&'a str]) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: parts.iter().map(|&text| Part { text }).collect(),
        }],
    }
}

/// Concatenate the text parts of the first candidate.
///
/// Returns [`GeminiError::EmptyResponse`] when there is no candidate or it
/// carries no text, propagating the prompt block reason if Gemini gave one.
pub fn extract_text(response: GenerateContentResponse) -> Result<String, GeminiError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GeminiError::EmptyResponse {
            block_reason: response.prompt_feedback.and_then(|f| f.block_reason),
        });
    }
    Ok(text)
}

impl GeminiApi {
    /// Create a client with a fresh [`reqwest::Client`].
    ///
    /// No request timeout is configured beyond reqwest's defaults.
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        let label = format!("gemini/{}", config.model);
        Self {
            client,
            config,
            label,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base, self.config.model
        )
    }

    /// Send `parts` as one user turn and return the generated text.
    pub async fn generate_content(&self, parts: &[&str]) -> Result<String, GeminiError> {
        let body = build_request(parts);
        tracing::debug!(
            model = %self.config.model,
            parts = parts.len(),
            "Calling Gemini generateContent"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let parsed = response.json::<GenerateContentResponse>().await?;
        extract_text(parsed)
    }

    /// Return the response unchanged on a 2xx status, otherwise an
    /// [`GeminiError::ApiError`] with the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GeminiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl TextGenerator for GeminiApi {
    fn name(&self) -> &str {
        &self.label
    }

    async fn generate(&self, prompt: &SchedulePrompt) -> Result<String, ProviderError> {
        Ok(self.generate_content(&prompt.parts()).await?)
    }
}
