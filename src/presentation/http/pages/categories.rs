// src/presentation/http/pages/categories.rs
//! The blog category admin page.
//!
//! Every request is authorized for `view:blog-category` before anything else
//! happens. Denied callers get the no-permission view and nothing is fetched.
//! Authorized callers get the layout and a `Loading...` placeholder right away;
//! the table follows in the same response once its query resolves.

use crate::application::ports::authorization::AuthorizationOutcome;
use crate::domain::user::Capability;
use crate::presentation::html::{BlogDataTable, NoPermission, SuspenseBoundary, layout};
use crate::presentation::http::{
    controllers::categories::{CategoryListParams, parse_params},
    error::{HttpResult, IntoHttpResult, denial_status},
    extractors::Credentials,
    state::HttpState,
};
use axum::{
    Extension,
    body::Body,
    extract::{Query, rejection::QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};
use std::sync::Arc;

pub const PAGE_PATH: &str = "/admin/blog/categories";
pub const PAGE_TITLE: &str = "Blog categories";
pub const LOAD_FAILED: &str = "Failed to load blog categories.";
const BOUNDARY_ID: &str = "blog-categories";

fn loading_fallback() -> Markup {
    html! { div { "Loading..." } }
}

fn load_failed() -> Markup {
    html! { div role="alert" class="load-error" { (LOAD_FAILED) } }
}

pub fn required_capabilities() -> [Capability; 1] {
    [Capability::view_blog_category()]
}

pub async fn categories_page(
    Extension(state): Extension<HttpState>,
    credentials: Credentials,
    params: Result<Query<CategoryListParams>, QueryRejection>,
) -> HttpResult<Response> {
    let outcome = state
        .services
        .authorizer()
        .authorize_user(credentials.as_deref(), &required_capabilities())
        .await
        .into_http()?;

    let user = match outcome {
        AuthorizationOutcome::Denied(denial) => {
            let body = NoPermission::new(&denial.message).page();
            return Ok((denial_status(denial.reason), Html(body)).into_response());
        }
        AuthorizationOutcome::Authorized(user) => user,
    };

    let table = BlogDataTable::new(
        Arc::clone(&state.services.category_queries),
        parse_params(params)?.into(),
        PAGE_PATH,
    )
    .into_http()?;

    tracing::info!(username = %user.username, role = %user.role, "rendering blog category admin page");

    let (head, tail) = layout::shell(PAGE_TITLE);
    let boundary = SuspenseBoundary::new(BOUNDARY_ID, loading_fallback(), load_failed());
    let body = Body::from_stream(boundary.stream(head, table.load(), tail));

    let mut response = (StatusCode::OK, body).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    Ok(response)
}
