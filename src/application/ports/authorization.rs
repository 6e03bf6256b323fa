// src/application/ports/authorization.rs
use crate::application::{ApplicationResult, dto::AuthenticatedUser};
use crate::domain::user::Capability;
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// No usable credentials: missing, malformed, forged or expired.
    Unauthenticated,
    /// Valid credentials without one of the required capabilities.
    MissingCapability,
}

impl DenialReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::MissingCapability => "missing_capability",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    pub reason: DenialReason,
    pub message: String,
}

impl Denial {
    pub fn new(reason: DenialReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }
}

/// Result of a capability check for the current caller.
#[derive(Debug, Clone)]
pub enum AuthorizationOutcome {
    Authorized(AuthenticatedUser),
    Denied(Denial),
}

impl AuthorizationOutcome {
    pub const fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized(_))
    }
}

#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Decide whether the holder of `credentials` holds every capability in
    /// `required`. Denials are `Ok(Denied)`; `Err` means the check itself failed.
    async fn authorize_user(
        &self,
        credentials: Option<&str>,
        required: &[Capability],
    ) -> ApplicationResult<AuthorizationOutcome>;
}
