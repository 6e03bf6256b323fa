use super::listing::{CategoryListQuery, CategoryPage};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait BlogCategoryRepository: Send + Sync {
    /// Return one page of categories plus the total number of matches.
    async fn list_page(&self, query: &CategoryListQuery) -> DomainResult<CategoryPage>;
}
