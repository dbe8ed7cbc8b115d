#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use slate_breakdown::BreakdownApi;
use slate_core::prompt::SchedulePrompt;
use slate_core::provider::{ProviderError, TextGenerator};
use tower::ServiceExt;

use slate_api::config::{ServerConfig, DEFAULT_BODY_LIMIT_BYTES};
use slate_api::router::build_app_router;
use slate_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Restricts CORS to a single dashboard origin (`http://localhost:5173`)
/// and sets no request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        request_timeout_secs: None,
        breakdown_service_url: None,
    }
}

// ---------------------------------------------------------------------------
// Stub provider
// ---------------------------------------------------------------------------

/// Canned provider reply.
pub enum Reply {
    Text(String),
    Fail,
    Delayed(Duration, String),
}

/// Provider stand-in that counts calls and returns a canned reply.
pub struct StubGenerator {
    reply: Reply,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Text(text.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail,
            calls: AtomicUsize::new(0),
        })
    }

    /// Replies with `text` only after `delay` has elapsed.
    pub fn sleeping(delay: Duration, text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Delayed(delay, text.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn name(&self) -> &str {
        "stub/test"
    }

    async fn generate(&self, _prompt: &SchedulePrompt) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail => Err(ProviderError::Transport("connection reset by peer".into())),
            Reply::Delayed(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(text.clone())
            }
        }
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router around `generator`, exercising the
/// same middleware stack production uses.
pub fn build_test_app(generator: Arc<dyn TextGenerator>) -> Router {
    build_test_app_with_breakdown(generator, None)
}

pub fn build_test_app_with_breakdown(
    generator: Arc<dyn TextGenerator>,
    breakdown: Option<Arc<BreakdownApi>>,
) -> Router {
    build_test_app_with_config(generator, breakdown, test_config())
}

pub fn build_test_app_with_config(
    generator: Arc<dyn TextGenerator>,
    breakdown: Option<Arc<BreakdownApi>>,
    config: ServerConfig,
) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        generator,
        breakdown,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: impl Into<Body>,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
