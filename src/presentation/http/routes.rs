// src/presentation/http/routes.rs
use crate::domain::user::Capability;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::categories,
    middleware::require_capabilities::require_capability,
    openapi::{self, StatusResponse},
    pages,
};
use axum::{
    Extension, Router,
    body::Body,
    http::{HeaderValue, Method, Request},
    middleware::{self, Next},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([axum::http::header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600));

    let api = Router::new()
        .route(
            "/api/v1/blog-categories",
            get(categories::list_categories),
        )
        .route_layer(middleware::from_fn(|req: Request<Body>, next: Next| {
            require_capability(req, next, Capability::view_blog_category())
        }));

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .route(
            pages::categories::PAGE_PATH,
            get(pages::categories::categories_page),
        )
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
