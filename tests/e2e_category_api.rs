// tests/e2e_category_api.rs
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;

mod support;

use support::{ADMIN_TOKEN, AUTHOR_TOKEN, BROKEN_TOKEN, EDITOR_TOKEN, ProbeRepo};

const API_PATH: &str = "/api/v1/blog-categories";

async fn json(resp: axum::response::Response) -> Value {
    let text = support::body_text(resp).await;
    serde_json::from_str(&text).expect("json body")
}

#[tokio::test]
async fn editor_lists_categories_as_json() {
    let app = support::make_test_router(Arc::new(ProbeRepo::new()));
    let resp = app
        .oneshot(support::get(&format!("{API_PATH}?q=TOOL"), Some(EDITOR_TOKEN)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(support::content_type(&resp).starts_with("application/json"));

    let body = json(resp).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["page"], 1);
    assert_eq!(body["page_size"], 10);
    assert_eq!(body["total_pages"], 1);
    assert_eq!(body["items"][0]["slug"], "tooling");
    assert_eq!(body["items"][0]["updated_at"], "2024-01-01T00:00:00+00:00");
}

#[tokio::test]
async fn admin_pages_through_results() {
    let app = support::make_test_router(Arc::new(ProbeRepo::new()));
    let resp = app
        .oneshot(support::get(&format!("{API_PATH}?page=2&page_size=2"), Some(ADMIN_TOKEN)))
        .await
        .unwrap();
    let body = json(resp).await;
    assert_eq!(body["total_pages"], 2);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Tooling");
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let repo = Arc::new(ProbeRepo::new());
    let app = support::make_test_router(repo.clone());
    let resp = app.oneshot(support::get(API_PATH, None)).await.unwrap();
    support::assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn author_is_forbidden() {
    let app = support::make_test_router(Arc::new(ProbeRepo::new()));
    let resp = app
        .oneshot(support::get(API_PATH, Some(AUTHOR_TOKEN)))
        .await
        .unwrap();
    let body = support::assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
    assert!(body["message"].as_str().unwrap().contains("view:blog-category"));
}

#[tokio::test]
async fn authorizer_errors_surface_as_500() {
    let app = support::make_test_router(Arc::new(ProbeRepo::new()));
    let resp = app
        .oneshot(support::get(API_PATH, Some(BROKEN_TOKEN)))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").await;
}

#[tokio::test]
async fn malformed_parameters_are_bad_requests() {
    let app = support::make_test_router(Arc::new(ProbeRepo::new()));
    for query in ["page=abc", "direction=sideways", "page=0"] {
        let resp = app
            .clone()
            .oneshot(support::get(&format!("{API_PATH}?{query}"), Some(EDITOR_TOKEN)))
            .await
            .unwrap();
        support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
    }
}

#[tokio::test]
async fn repository_failure_is_internal_error() {
    let app = support::make_test_router(Arc::new(ProbeRepo::failing()));
    let resp = app
        .oneshot(support::get(API_PATH, Some(EDITOR_TOKEN)))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").await;
}

#[tokio::test]
async fn health_and_openapi_are_public() {
    let app = support::make_test_router(Arc::new(ProbeRepo::new()));

    let health = app.clone().oneshot(support::get("/health", None)).await.unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(json(health).await["status"], "ok");

    let doc = app.oneshot(support::get("/openapi.json", None)).await.unwrap();
    assert_eq!(doc.status(), StatusCode::OK);
    let doc = json(doc).await;
    assert!(doc["paths"][API_PATH]["get"].is_object());
}
