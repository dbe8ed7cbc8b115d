//! Handlers relaying to the external script-breakdown service.
//!
//! Routes:
//! - `POST /api/script-analysis` — upload a script file (multipart `script_file`)
//! - `GET  /api/script-analysis?script_id=` — fetch a stored analysis

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, State};
use axum::Json;
use serde::Deserialize;
use slate_breakdown::api::SCRIPT_FILE_FIELD;
use slate_breakdown::{BreakdownApi, ScriptUpload};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /api/script-analysis`.
#[derive(Debug, Deserialize)]
pub struct AnalysisQuery {
    pub script_id: Option<String>,
}

fn breakdown_client(state: &AppState) -> AppResult<Arc<BreakdownApi>> {
    state.breakdown.clone().ok_or_else(|| {
        AppError::ServiceUnavailable("Script breakdown service is not configured.".to_string())
    })
}

/// POST /api/script-analysis
///
/// Forwards the uploaded `script_file` to the breakdown service and returns
/// its JSON response (generated `script_id`, optional `analysis_data`).
pub async fn upload_script(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<serde_json::Value>> {
    let client = breakdown_client(&state)?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(SCRIPT_FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("script").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        upload = Some(ScriptUpload {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let upload = upload
        .ok_or_else(|| AppError::BadRequest(format!("{SCRIPT_FILE_FIELD} is required.")))?;
    if upload.bytes.is_empty() {
        return Err(AppError::BadRequest(format!(
            "{SCRIPT_FILE_FIELD} must not be empty."
        )));
    }

    tracing::info!(
        file_name = %upload.file_name,
        size = upload.bytes.len(),
        "Forwarding script to breakdown service"
    );

    let body = client.upload_script(upload).await?;
    Ok(Json(body))
}

/// GET /api/script-analysis?script_id=
pub async fn get_analysis(
    State(state): State<AppState>,
    query: Result<Query<AnalysisQuery>, QueryRejection>,
) -> AppResult<Json<serde_json::Value>> {
    let client = breakdown_client(&state)?;
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let script_id = query
        .script_id
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("script_id is required.".to_string()))?;

    let body = client.fetch_analysis(&script_id).await?;
    Ok(Json(body))
}
