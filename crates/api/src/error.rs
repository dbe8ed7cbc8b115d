use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use slate_breakdown::BreakdownError;
use slate_core::error::CoreError;
use slate_core::relay::RelayError;

/// Message returned for every provider or format failure of the schedule relay.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate schedule.";

/// Message returned when the breakdown service cannot be reached or fails.
pub const BREAKDOWN_FAILED_MESSAGE: &str = "Script breakdown service failed.";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "error": message, "code": CODE }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `slate_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure of the schedule generation relay.
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// A failure talking to the script-breakdown service.
    #[error(transparent)]
    Breakdown(#[from] BreakdownError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body exceeds the configured limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// A collaborator the request needs is not configured.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            // --- Relay errors ---
            AppError::Relay(RelayError::Invalid(core)) => classify_core_error(core),
            AppError::Relay(err @ (RelayError::Upstream(_) | RelayError::Format(_))) => {
                tracing::error!(error = %err, "Schedule generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_FAILED",
                    GENERATION_FAILED_MESSAGE.to_string(),
                )
            }

            // --- Breakdown errors ---
            AppError::Breakdown(BreakdownError::Rejected { status, body }) => {
                tracing::warn!(status, "Breakdown service rejected request");
                // Relay the service's own status and body.
                let status =
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_REQUEST);
                return (status, axum::Json(body.clone())).into_response();
            }
            AppError::Breakdown(err) => {
                tracing::error!(error = %err, "Breakdown service call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "BREAKDOWN_FAILED",
                    BREAKDOWN_FAILED_MESSAGE.to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                msg.clone(),
            ),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
    }
}
