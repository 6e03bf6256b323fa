// src/application/services/mod.rs
mod authorization;

use std::sync::Arc;

pub use authorization::{SESSION_INVALID, SIGN_IN_REQUIRED, TokenAuthorizer};

use crate::{
    application::{
        ports::{authorization::Authorizer, security::TokenManager, time::Clock},
        queries::categories::CategoryQueryService,
    },
    domain::category::BlogCategoryRepository,
};

pub struct ApplicationServices {
    pub category_queries: Arc<CategoryQueryService>,
    authorizer: Arc<dyn Authorizer>,
}

impl ApplicationServices {
    pub fn new(
        category_repo: Arc<dyn BlogCategoryRepository>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        default_page_size: u32,
    ) -> Self {
        let authorizer: Arc<dyn Authorizer> =
            Arc::new(TokenAuthorizer::new(token_manager, clock));
        let category_queries = Arc::new(CategoryQueryService::new(
            category_repo,
            default_page_size,
        ));

        Self {
            category_queries,
            authorizer,
        }
    }

    /// Replace the default token-backed authorizer.
    #[must_use]
    pub fn with_authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
        self.authorizer = authorizer;
        self
    }

    pub fn authorizer(&self) -> Arc<dyn Authorizer> {
        Arc::clone(&self.authorizer)
    }
}
