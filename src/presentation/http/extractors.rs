// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, presentation::http::state::HttpState};
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// The caller's raw access token, if any. A bearer header wins over the session cookie.
#[derive(Debug, Clone, Default)]
pub struct Credentials(pub Option<String>);

impl Credentials {
    pub fn from_headers(headers: &HeaderMap, cookie_name: &str) -> Self {
        if let Some(header) = headers.typed_get::<Authorization<Bearer>>() {
            return Self(Some(header.token().to_string()));
        }

        let from_cookie = headers
            .typed_get::<Cookie>()
            .and_then(|cookies| cookies.get(cookie_name).map(str::to_string))
            .filter(|value| !value.is_empty());
        Self(from_cookie)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = parts.extensions.get::<HttpState>().ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;

        Ok(Self::from_headers(&parts.headers, &app_state.session_cookie))
    }
}
