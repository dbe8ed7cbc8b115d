//! REST client for the script-breakdown service.

use reqwest::multipart::{Form, Part};
use serde_json::Value;

/// Path of the analysis resource on the breakdown service.
const ANALYSIS_PATH: &str = "/api/script-analysis/";

/// Multipart field name the breakdown service expects the file under.
pub const SCRIPT_FILE_FIELD: &str = "script_file";

/// HTTP client for one breakdown service instance.
pub struct BreakdownApi {
    client: reqwest::Client,
    base_url: String,
}

/// A script file to upload.
#[derive(Debug, Clone)]
pub struct ScriptUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Errors from the breakdown REST layer.
#[derive(Debug, thiserror::Error)]
pub enum BreakdownError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service rejected the request (4xx). `body` is relayed to the caller.
    #[error("Breakdown service rejected request ({status})")]
    Rejected { status: u16, body: Value },

    /// The service failed (5xx or an unexpected status).
    #[error("Breakdown service error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

impl BreakdownApi {
    /// * `base_url` - Service root, e.g. `http://127.0.0.1:8000/dashboard`.
    pub fn new(base_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn analysis_url(&self) -> String {
        format!("{}{ANALYSIS_PATH}", self.base_url)
    }

    /// Upload a script for analysis.
    ///
    /// Returns the service's JSON response, which carries the generated
    /// `script_id` and, when already available, `analysis_data`.
    pub async fn upload_script(&self, upload: ScriptUpload) -> Result<Value, BreakdownError> {
        let mut part = Part::bytes(upload.bytes).file_name(upload.file_name);
        if let Some(content_type) = upload.content_type {
            part = part.mime_str(&content_type)?;
        }
        let form = Form::new().part(SCRIPT_FILE_FIELD, part);
        tracing::debug!(url = %self.analysis_url(), "Uploading script to breakdown service");

        let response = self
            .client
            .post(self.analysis_url())
            .multipart(form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the stored analysis for `script_id`.
    pub async fn fetch_analysis(&self, script_id: &str) -> Result<Value, BreakdownError> {
        tracing::debug!(script_id, "Fetching script analysis");
        let response = self
            .client
            .get(self.analysis_url())
            .query(&[("script_id", script_id)])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Parse a 2xx JSON body, or classify the failure by status.
    async fn parse_response(response: reqwest::Response) -> Result<Value, BreakdownError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<Value>().await?);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());

        if status.is_client_error() {
            let body = serde_json::from_str::<Value>(&body)
                .unwrap_or_else(|_| serde_json::json!({ "error": body }));
            return Err(BreakdownError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Err(BreakdownError::ApiError {
            status: status.as_u16(),
            body,
        })
    }
}
