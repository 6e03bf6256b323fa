// src/application/services/authorization.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    application::{
        ApplicationResult,
        error::ApplicationError,
        ports::{
            authorization::{AuthorizationOutcome, Authorizer, Denial, DenialReason},
            security::TokenManager,
            time::Clock,
        },
    },
    domain::user::Capability,
};

pub const SIGN_IN_REQUIRED: &str = "You must be signed in to view this page.";
pub const SESSION_INVALID: &str =
    "Your session is invalid or has expired. Please sign in again.";

/// Authorizer backed by the token manager: credentials are a serialized access token.
pub struct TokenAuthorizer {
    token_manager: Arc<dyn TokenManager>,
    clock: Arc<dyn Clock>,
}

impl TokenAuthorizer {
    pub fn new(token_manager: Arc<dyn TokenManager>, clock: Arc<dyn Clock>) -> Self {
        Self {
            token_manager,
            clock,
        }
    }

    fn deny(reason: DenialReason, message: impl Into<String>) -> AuthorizationOutcome {
        AuthorizationOutcome::Denied(Denial::new(reason, message))
    }
}

#[async_trait]
impl Authorizer for TokenAuthorizer {
    async fn authorize_user(
        &self,
        credentials: Option<&str>,
        required: &[Capability],
    ) -> ApplicationResult<AuthorizationOutcome> {
        let Some(token) = credentials.map(str::trim).filter(|t| !t.is_empty()) else {
            tracing::info!(reason = %DenialReason::Unauthenticated, "authorization denied: no credentials");
            return Ok(Self::deny(DenialReason::Unauthenticated, SIGN_IN_REQUIRED));
        };

        let user = match self.token_manager.authenticate(token).await {
            Ok(user) => user,
            Err(ApplicationError::Unauthorized(detail)) => {
                tracing::info!(
                    reason = %DenialReason::Unauthenticated,
                    detail = %detail,
                    "authorization denied: token rejected"
                );
                return Ok(Self::deny(DenialReason::Unauthenticated, SESSION_INVALID));
            }
            Err(err) => return Err(err),
        };

        if user.expires_at <= self.clock.now() {
            tracing::info!(
                reason = %DenialReason::Unauthenticated,
                username = %user.username,
                "authorization denied: token expired"
            );
            return Ok(Self::deny(DenialReason::Unauthenticated, SESSION_INVALID));
        }

        if let Some(missing) = user.first_missing(required) {
            tracing::info!(
                reason = %DenialReason::MissingCapability,
                username = %user.username,
                capability = %missing,
                "authorization denied"
            );
            return Ok(Self::deny(
                DenialReason::MissingCapability,
                format!(
                    "You do not have permission to view this page. Missing capability: {missing}"
                ),
            ));
        }

        tracing::debug!(username = %user.username, role = %user.role, "authorization granted");
        Ok(AuthorizationOutcome::Authorized(user))
    }
}
