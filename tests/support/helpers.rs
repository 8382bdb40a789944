// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt as _;

use quillstash::application::services::ApplicationServices;
use quillstash::domain::article::ArticleRepository;
use quillstash::infrastructure::repositories::InMemoryArticleRepository;
use quillstash::presentation::http::routes::{RouterOptions, build_router_with_options};
use quillstash::presentation::http::state::HttpState;

pub const BODY_LIMIT: usize = 1024 * 1024;

pub fn build_test_state(repo: Arc<dyn ArticleRepository>) -> HttpState {
    HttpState {
        services: Arc::new(ApplicationServices::new(repo)),
    }
}

/// Router backed by a fresh, empty in-memory store.
pub fn make_test_router() -> axum::Router {
    make_test_router_with_repo(Arc::new(InMemoryArticleRepository::new()))
}

pub fn make_test_router_with_repo(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    make_test_router_with_options(repo, RouterOptions::default())
}

pub fn make_test_router_with_options(
    repo: Arc<dyn ArticleRepository>,
    options: RouterOptions,
) -> axum::Router {
    build_router_with_options(build_test_state(repo), options)
}

pub fn json_request(method: Method, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &axum::Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn body_text(resp: Response) -> String {
    String::from_utf8(body_bytes(resp).await).expect("utf-8 body")
}

pub async fn body_json(resp: Response) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).expect("json body")
}

fn content_type(resp: &Response) -> String {
    resp.headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Assert a plain-text `ok` success response.
pub async fn assert_ok_text(resp: Response) {
    assert_eq!(resp.status(), StatusCode::OK);
    let ct = content_type(&resp);
    assert!(ct.starts_with("text/plain"), "unexpected content-type: {ct}");
    assert_eq!(body_text(resp).await, "ok");
}

/// Assert an `ErrorResponse` JSON body with the expected status and reason.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = content_type(&resp);
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
