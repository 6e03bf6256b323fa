use super::CategoryQueryService;
use crate::{
    application::{
        dto::{CategoryDto, PaginatedResult},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryListQuery, CategorySortField, SortDirection},
};

pub const MAX_PAGE_SIZE: u32 = 100;

/// Raw listing parameters as received from a caller. `None` means "use the default".
#[derive(Debug, Clone, Default)]
pub struct ListCategoriesQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub search: Option<String>,
}

impl CategoryQueryService {
    pub async fn list_categories(
        &self,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<PaginatedResult<CategoryDto>> {
        let normalized = self.normalize_listing(query)?;
        let page = self.repo.list_page(&normalized).await?;

        tracing::debug!(
            page = normalized.page,
            page_size = normalized.page_size,
            total = page.total,
            "listed blog categories"
        );

        let items = page.items.into_iter().map(Into::into).collect();
        Ok(PaginatedResult::new(
            items,
            page.total,
            normalized.page,
            normalized.page_size,
        ))
    }

    pub fn normalize_listing(
        &self,
        query: ListCategoriesQuery,
    ) -> ApplicationResult<CategoryListQuery> {
        let page = match query.page {
            None => 1,
            Some(0) => return Err(ApplicationError::validation("page must be at least 1")),
            Some(page) => page,
        };

        let page_size = match query.page_size {
            None | Some(0) => self.default_page_size,
            Some(size) => size,
        }
        .clamp(1, MAX_PAGE_SIZE);

        let sort = non_blank(query.sort)
            .map(|value| value.parse::<CategorySortField>())
            .transpose()?
            .unwrap_or_default();
        let direction = non_blank(query.direction)
            .map(|value| value.parse::<SortDirection>())
            .transpose()?
            .unwrap_or_default();

        Ok(CategoryListQuery {
            page,
            page_size,
            sort,
            direction,
            search: non_blank(query.search),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
