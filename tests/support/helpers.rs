// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION};
use axum::response::Response;
use blog_admin::application::{
    ports::{authorization::Authorizer, security::TokenManager, time::Clock},
    services::ApplicationServices,
};
use blog_admin::domain::category::BlogCategoryRepository;
use blog_admin::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub const SESSION_COOKIE: &str = "access_token";
pub const PAGE_PATH: &str = "/admin/blog/categories";

pub fn build_services(repo: Arc<dyn BlogCategoryRepository>) -> ApplicationServices {
    let token_manager: Arc<dyn TokenManager> = Arc::new(mocks::DummyTokenManager);
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    ApplicationServices::new(repo, token_manager, clock, 10)
}

pub fn router_with(services: ApplicationServices) -> axum::Router {
    let state = HttpState {
        services: Arc::new(services),
        session_cookie: Arc::from(SESSION_COOKIE),
    };
    build_router(state, &["http://localhost:3000".to_string()])
}

pub fn make_test_router(repo: Arc<dyn BlogCategoryRepository>) -> axum::Router {
    router_with(build_services(repo))
}

pub fn make_router_with_authorizer(
    repo: Arc<dyn BlogCategoryRepository>,
    authorizer: Arc<dyn Authorizer>,
) -> axum::Router {
    router_with(build_services(repo).with_authorizer(authorizer))
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request")
}

pub async fn body_text(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn content_type(resp: &Response) -> String {
    resp.headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// Assert that a response is an `ErrorResponse` JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = content_type(&resp);
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let text = body_text(resp).await;
    let json: Value = serde_json::from_str(&text).expect("expected valid json body for error");
    assert_eq!(json["error"], expected_error, "unexpected error body: {text}");
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message in {text}"
    );
    json
}
