#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use flashdeck_api::config::ServerConfig;
use flashdeck_api::router::build_app_router;
use flashdeck_api::state::AppState;
use flashdeck_core::draft::{into_drafts, DraftCard};
use flashdeck_generation::parse::parse_cards;
use flashdeck_generation::{AnthropicConfig, CardGenerator, GenerationError};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        generation: AnthropicConfig {
            timeout: Duration::from_secs(5),
            ..AnthropicConfig::default()
        },
    }
}

// ---------------------------------------------------------------------------
// Generator stubs
// ---------------------------------------------------------------------------

/// Replies with a fixed model output and runs it through the real parser.
pub struct CannedGenerator {
    pub reply: String,
}

#[async_trait]
impl CardGenerator for CannedGenerator {
    async fn generate(&self, topic: &str) -> Result<Vec<DraftCard>, GenerationError> {
        if topic.trim().is_empty() {
            return Err(GenerationError::EmptyTopic);
        }
        Ok(into_drafts(parse_cards(&self.reply, 10)?))
    }
}

/// Always fails as if the service were unreachable.
pub struct UnavailableGenerator;

#[async_trait]
impl CardGenerator for UnavailableGenerator {
    async fn generate(&self, _topic: &str) -> Result<Vec<DraftCard>, GenerationError> {
        Err(GenerationError::Service("connection refused".to_string()))
    }
}

/// Takes longer than any request timeout used in tests.
pub struct SlowGenerator;

#[async_trait]
impl CardGenerator for SlowGenerator {
    async fn generate(&self, _topic: &str) -> Result<Vec<DraftCard>, GenerationError> {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok(Vec::new())
    }
}

/// Panics inside the handler.
pub struct PanickingGenerator;

#[async_trait]
impl CardGenerator for PanickingGenerator {
    async fn generate(&self, _topic: &str) -> Result<Vec<DraftCard>, GenerationError> {
        panic!("generator exploded at /var/lib/secret");
    }
}

pub fn canned(reply: &str) -> Arc<dyn CardGenerator> {
    Arc::new(CannedGenerator {
        reply: reply.to_string(),
    })
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router with the given generator.
pub fn build_test_app_with(pool: SqlitePool, generator: Arc<dyn CardGenerator>) -> Router {
    let state = AppState { pool, generator };
    build_app_router(state, &test_config())
}

/// Build the full application router with an explicit configuration.
pub fn build_test_app_with_config(
    pool: SqlitePool,
    generator: Arc<dyn CardGenerator>,
    config: &ServerConfig,
) -> Router {
    let state = AppState { pool, generator };
    build_app_router(state, config)
}

/// Build the full application router with a generator returning one card.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with(
        pool,
        canned(r#"[{"term":"France","definition":"Paris"}]"#),
    )
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Send a bodiless request with an arbitrary method.
pub async fn request(app: Router, method: Method, uri: &str) -> Response {
    send(app, method, uri, None).await
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Send a request with a raw (possibly malformed) JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
