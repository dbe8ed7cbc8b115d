//! Integration tests for [`GeminiApi`] against a local stand-in server.

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{json, Value};
use slate_core::prompt::SchedulePrompt;
use slate_core::provider::{ProviderError, TextGenerator};
use slate_gemini::{GeminiApi, GeminiConfig};

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1beta")
}

fn config(api_base: String) -> GeminiConfig {
    GeminiConfig {
        api_key: "test-key".to_string(),
        model: "gemini-2.5-flash".to_string(),
        api_base,
    }
}

fn prompt() -> SchedulePrompt {
    SchedulePrompt::new(
        "INT. OFFICE - DAY",
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
    )
}

/// Echoes back what it received so the test can inspect the request.
async fn echo(
    Path(target): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let report = json!({
        "target": target,
        "key": headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()),
        "parts": body["contents"][0]["parts"].as_array().map(|p| p.len()),
        "script": body["contents"][0]["parts"][1]["text"],
    });
    Json(json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": report.to_string()}]}}]
    }))
}

// ---------------------------------------------------------------------------
// Test: request goes to the model endpoint with key header and both parts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sends_prompt_parts_to_model_endpoint() {
    let base = serve(Router::new().route("/v1beta/models/{target}", post(echo))).await;
    let api = GeminiApi::new(config(base));

    let text = api.generate(&prompt()).await.unwrap();
    let report: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(report["target"], "gemini-2.5-flash:generateContent");
    assert_eq!(report["key"], "test-key");
    assert_eq!(report["parts"], 2);
    assert_eq!(report["script"], "INT. OFFICE - DAY");
}

// ---------------------------------------------------------------------------
// Test: non-2xx status surfaces as an API error with status and body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_error_status_is_reported() {
    let router = Router::new().route(
        "/v1beta/models/{target}",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota exceeded") }),
    );
    let api = GeminiApi::new(config(serve(router).await));

    let err = api.generate(&prompt()).await.unwrap_err();

    assert_matches!(
        err,
        ProviderError::Api { status: 429, body } if body == "quota exceeded"
    );
}

// ---------------------------------------------------------------------------
// Test: blocked prompt surfaces as an empty response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blocked_prompt_is_empty_response() {
    let router = Router::new().route(
        "/v1beta/models/{target}",
        post(|| async { Json(json!({"promptFeedback": {"blockReason": "SAFETY"}})) }),
    );
    let api = GeminiApi::new(config(serve(router).await));

    let err = api.generate(&prompt()).await.unwrap_err();

    assert_matches!(err, ProviderError::EmptyResponse { reason: Some(r) } if r == "SAFETY");
}

// ---------------------------------------------------------------------------
// Test: unreachable provider is a transport error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_provider_is_transport_error() {
    // Bind then drop to get a port nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = GeminiApi::new(config(format!("http://{addr}/v1beta")));
    let err = api.generate(&prompt()).await.unwrap_err();

    assert_matches!(err, ProviderError::Transport(_));
}

#[test]
fn name_includes_model() {
    let api = GeminiApi::new(config("http://localhost".to_string()));
    assert_eq!(api.name(), "gemini/gemini-2.5-flash");
}
