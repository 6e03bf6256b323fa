// src/presentation/http/controllers/categories.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::ApplicationError,
    queries::categories::ListCategoriesQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::CategoryListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Query, rejection::QueryRejection},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryListParams {
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u32>,
    /// Rows per page, capped at 100.
    #[serde(default)]
    pub page_size: Option<u32>,
    /// One of `name`, `slug`, `post_count`, `created_at`, `updated_at`.
    #[serde(default)]
    pub sort: Option<String>,
    /// `asc` or `desc`.
    #[serde(default)]
    pub direction: Option<String>,
    /// Case-insensitive match on name or slug.
    #[serde(default)]
    pub q: Option<String>,
}

impl From<CategoryListParams> for ListCategoriesQuery {
    fn from(params: CategoryListParams) -> Self {
        Self {
            page: params.page,
            page_size: params.page_size,
            sort: params.sort,
            direction: params.direction,
            search: params.q,
        }
    }
}

pub fn parse_params(
    params: Result<Query<CategoryListParams>, QueryRejection>,
) -> HttpResult<CategoryListParams> {
    params
        .map(|Query(params)| params)
        .map_err(|rejection| HttpError::from_error(ApplicationError::validation(rejection.body_text())))
}

#[utoipa::path(
    get,
    path = "/api/v1/blog-categories",
    params(CategoryListParams),
    responses(
        (status = 200, description = "One page of blog categories.", body = CategoryListResponse),
        (status = 400, description = "Invalid listing parameters.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid credentials.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Missing view:blog-category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blog categories"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    Extension(user): Extension<AuthenticatedUser>,
    params: Result<Query<CategoryListParams>, QueryRejection>,
) -> HttpResult<Json<CategoryListResponse>> {
    let params = parse_params(params)?;
    tracing::debug!(username = %user.username, "listing blog categories");

    state
        .services
        .category_queries
        .list_categories(params.into())
        .await
        .into_http()
        .map(|page| Json(page.into()))
}
