use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Text-generation provider label, e.g. `gemini/gemini-2.5-flash`.
    pub provider: String,
    /// Whether the script-breakdown relay is configured.
    pub breakdown_configured: bool,
}

/// GET /health -- returns service health. Does not contact the provider.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        provider: state.generator.name().to_string(),
        breakdown_configured: state.breakdown.is_some(),
    })
}

/// Mount health check routes (intended for root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
