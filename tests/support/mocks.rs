// tests/support/mocks.rs
use async_trait::async_trait;
use blog_admin::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::{
        authorization::{AuthorizationOutcome, Authorizer, Denial, DenialReason},
        security::TokenManager,
        time::Clock,
    },
};
use blog_admin::domain::{
    category::{
        BlogCategory, BlogCategoryRepository, CategoryId, CategoryListQuery, CategoryName,
        CategoryPage, CategorySlug,
    },
    errors::{DomainError, DomainResult},
    user::{Capability, Role, UserId},
};
use blog_admin::infrastructure::repositories::InMemoryBlogCategoryRepository;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::Notify;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const EDITOR_TOKEN: &str = "editor-token";
pub const AUTHOR_TOKEN: &str = "author-token";
pub const EXPIRED_TOKEN: &str = "expired-token";
/// Makes the token manager fail with an infrastructure error.
pub const BROKEN_TOKEN: &str = "broken-token";

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/* -------------------------------- Clock -------------------------------- */

#[derive(Clone, Debug, Default)]
pub struct DummyClock;

impl Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/* -------------------------------- TokenManager -------------------------------- */

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

fn user(id: i64, username: &str, role: Role, expires_at: DateTime<Utc>) -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        username: username.into(),
        role,
        capabilities: role.default_capabilities(),
        issued_at: fixed_now() - Duration::hours(1),
        expires_at,
    }
}

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Err(ApplicationError::infrastructure("not implemented"))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let later = fixed_now() + Duration::hours(1);
        match token {
            ADMIN_TOKEN => Ok(user(1, "ada", Role::Admin, later)),
            EDITOR_TOKEN => Ok(user(2, "eddie", Role::Editor, later)),
            AUTHOR_TOKEN => Ok(user(3, "arthur", Role::Author, later)),
            EXPIRED_TOKEN => Ok(user(4, "old", Role::Admin, fixed_now() - Duration::minutes(5))),
            BROKEN_TOKEN => Err(ApplicationError::infrastructure("key service unavailable")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}

/* -------------------------------- Authorizers -------------------------------- */

/// Returns a fixed outcome and records every capability set it was asked for.
pub struct RecordingAuthorizer {
    outcome: AuthorizationOutcome,
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingAuthorizer {
    pub fn denying(reason: DenialReason, message: &str) -> Self {
        Self {
            outcome: AuthorizationOutcome::Denied(Denial::new(reason, message)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn granting() -> Self {
        Self {
            outcome: AuthorizationOutcome::Authorized(user(
                2,
                "eddie",
                Role::Editor,
                fixed_now() + Duration::hours(1),
            )),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("poisoned").clone()
    }
}

#[async_trait]
impl Authorizer for RecordingAuthorizer {
    async fn authorize_user(
        &self,
        _credentials: Option<&str>,
        required: &[Capability],
    ) -> ApplicationResult<AuthorizationOutcome> {
        self.calls
            .lock()
            .expect("poisoned")
            .push(required.iter().map(ToString::to_string).collect());
        Ok(self.outcome.clone())
    }
}

/// The authorization check itself blows up.
#[derive(Default)]
pub struct FailingAuthorizer;

#[async_trait]
impl Authorizer for FailingAuthorizer {
    async fn authorize_user(
        &self,
        _credentials: Option<&str>,
        _required: &[Capability],
    ) -> ApplicationResult<AuthorizationOutcome> {
        Err(ApplicationError::infrastructure("authorization backend unreachable"))
    }
}

/* -------------------------------- Category repositories -------------------------------- */

pub fn category(id: i64, name: &str, slug: &str, posts: i64) -> BlogCategory {
    BlogCategory {
        id: CategoryId::new(id).expect("invalid id"),
        name: CategoryName::new(name).expect("invalid name"),
        slug: CategorySlug::new(slug).expect("invalid slug"),
        description: Some(format!("All about {name}")),
        post_count: posts,
        created_at: fixed_now() - Duration::days(id),
        updated_at: fixed_now(),
    }
}

pub fn sample_repo() -> InMemoryBlogCategoryRepository {
    InMemoryBlogCategoryRepository::new(vec![
        category(1, "Rust", "rust", 10),
        category(2, "Databases", "databases", 4),
        category(3, "Tooling", "tooling", 7),
    ])
}

/// Counts `list_page` calls and can hold each call until released.
pub struct ProbeRepo {
    inner: InMemoryBlogCategoryRepository,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
    fail: bool,
}

impl ProbeRepo {
    pub fn new() -> Self {
        Self {
            inner: sample_repo(),
            calls: AtomicUsize::new(0),
            gate: None,
            fail: false,
        }
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlogCategoryRepository for ProbeRepo {
    async fn list_page(&self, query: &CategoryListQuery) -> DomainResult<CategoryPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail {
            return Err(DomainError::Persistence("connection reset by peer".into()));
        }
        self.inner.list_page(query).await
    }
}
