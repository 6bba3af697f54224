// tests/support/helpers.rs
use super::mocks::{InMemoryArticleCache, InMemoryArticleRepo, SteppingClock};
use axum::body;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use byline::application::ports::{cache::ArticleCacheStore, time::Clock};
use byline::application::services::ApplicationServices;
use byline::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use byline::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestBackend {
    pub services: Arc<ApplicationServices>,
    pub repo: Arc<InMemoryArticleRepo>,
    pub cache: Arc<InMemoryArticleCache>,
}

pub fn build_test_backend() -> TestBackend {
    let repo = Arc::new(InMemoryArticleRepo::new());
    let cache = Arc::new(InMemoryArticleCache::new());

    let write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = repo.clone();
    let cache_store: Arc<dyn ArticleCacheStore> = cache.clone();
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::new());

    let services = Arc::new(ApplicationServices::new(
        write_repo, read_repo, cache_store, clock,
    ));

    TestBackend {
        services,
        repo,
        cache,
    }
}

pub struct TestApp {
    pub router: axum::Router,
    pub repo: Arc<InMemoryArticleRepo>,
    pub cache: Arc<InMemoryArticleCache>,
}

pub fn make_test_app() -> TestApp {
    let backend = build_test_backend();
    let state = HttpState {
        services: Arc::clone(&backend.services),
        api_key: Arc::from(TEST_API_KEY),
    };

    TestApp {
        router: build_router(state),
        repo: backend.repo,
        cache: backend.cache,
    }
}

/// Request builder carrying the test API key.
pub fn authed_request(method: Method, uri: &str) -> axum::http::request::Builder {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-api-key", TEST_API_KEY)
}

pub fn json_body(value: &Value) -> Body {
    Body::from(value.to_string())
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorBody JSON with the expected status and
/// canonical error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in error response"
    );
}
