// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use async_trait::async_trait;

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    /// Verify a serialized token. Bad, forged or expired tokens yield
    /// `ApplicationError::Unauthorized`; anything else is an infrastructure fault.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
