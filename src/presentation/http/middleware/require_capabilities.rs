// src/presentation/http/middleware/require_capabilities.rs
use crate::application::{error::ApplicationError, ports::authorization::AuthorizationOutcome};
use crate::domain::user::Capability;
use crate::presentation::http::{error::HttpError, extractors::Credentials, state::HttpState};
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Middleware that lets a request through only when the caller holds `capability`.
/// The authenticated user is placed in the request extensions for handlers.
///
/// Usage: `axum::middleware::from_fn(|req, next| require_capability(req, next, Capability::view_blog_category()))`
pub async fn require_capability(
    mut req: Request<Body>,
    next: Next,
    capability: Capability,
) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let credentials = Credentials::from_headers(req.headers(), &state.session_cookie);
    let outcome = state
        .services
        .authorizer()
        .authorize_user(credentials.as_deref(), std::slice::from_ref(&capability))
        .await;

    match outcome {
        Ok(AuthorizationOutcome::Authorized(user)) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Ok(AuthorizationOutcome::Denied(denial)) => HttpError::from(denial).into_response(),
        Err(err) => HttpError::from_error(err).into_response(),
    }
}
