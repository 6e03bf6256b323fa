//! The blog category table rendered inside the admin page's suspense boundary.

use crate::application::{
    ApplicationResult,
    dto::{CategoryDto, PaginatedResult},
    error::ApplicationError,
    queries::categories::{CategoryQueryService, ListCategoriesQuery},
};
use crate::domain::category::{CategoryListQuery, CategorySortField, SortDirection};
use maud::{Markup, html};
use serde::Serialize;
use std::sync::Arc;

const COLUMNS: [(&str, Option<CategorySortField>); 5] = [
    ("Name", Some(CategorySortField::Name)),
    ("Slug", Some(CategorySortField::Slug)),
    ("Description", None),
    ("Posts", Some(CategorySortField::PostCount)),
    ("Updated", Some(CategorySortField::UpdatedAt)),
];

pub struct BlogDataTable {
    queries: Arc<CategoryQueryService>,
    raw: ListCategoriesQuery,
    view: CategoryListQuery,
    base_path: &'static str,
}

#[derive(Serialize)]
struct TableLink<'a> {
    page: u32,
    page_size: u32,
    sort: &'a str,
    direction: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
}

impl BlogDataTable {
    /// Validate the listing parameters up front so bad input is rejected before
    /// any markup is streamed. No data is fetched until [`Self::load`] runs.
    pub fn new(
        queries: Arc<CategoryQueryService>,
        raw: ListCategoriesQuery,
        base_path: &'static str,
    ) -> ApplicationResult<Self> {
        let view = queries.normalize_listing(raw.clone())?;
        Ok(Self {
            queries,
            raw,
            view,
            base_path,
        })
    }

    pub async fn load(self) -> ApplicationResult<Markup> {
        let page = self.queries.list_categories(self.raw.clone()).await?;
        self.render(&page)
    }

    pub fn render(&self, page: &PaginatedResult<CategoryDto>) -> ApplicationResult<Markup> {
        let headers = COLUMNS
            .into_iter()
            .map(|(label, field)| self.header(label, field))
            .collect::<ApplicationResult<Vec<_>>>()?;
        let pagination = self.pagination(page)?;

        Ok(html! {
            div class="blog-data-table" {
                (self.search_form())
                table class="data-table" {
                    thead { tr { @for header in &headers { (header) } } }
                    tbody {
                        @if page.items.is_empty() {
                            tr { td colspan="5" class="empty" { "No categories found." } }
                        } @else {
                            @for item in &page.items { (row(item)) }
                        }
                    }
                }
                (pagination)
            }
        })
    }

    fn href(&self, page: u32, sort: CategorySortField, direction: SortDirection) -> ApplicationResult<String> {
        let link = TableLink {
            page,
            page_size: self.view.page_size,
            sort: sort.as_str(),
            direction: direction.as_str(),
            q: self.view.search.as_deref(),
        };
        let query = serde_urlencoded::to_string(&link)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(format!("{}?{query}", self.base_path))
    }

    fn search_form(&self) -> Markup {
        html! {
            form method="get" action=(self.base_path) class="data-table-search" {
                input type="search" name="q" value=(self.view.search.as_deref().unwrap_or_default())
                    placeholder="Search categories";
                input type="hidden" name="sort" value=(self.view.sort.as_str());
                input type="hidden" name="direction" value=(self.view.direction.as_str());
                input type="hidden" name="page_size" value=(self.view.page_size);
                button type="submit" { "Search" }
            }
        }
    }

    fn header(&self, label: &str, field: Option<CategorySortField>) -> ApplicationResult<Markup> {
        let Some(field) = field else {
            return Ok(html! { th scope="col" { (label) } });
        };

        let active = field == self.view.sort;
        let (direction, aria) = if active {
            let aria = match self.view.direction {
                SortDirection::Asc => "ascending",
                SortDirection::Desc => "descending",
            };
            (self.view.direction.reversed(), aria)
        } else {
            (SortDirection::Asc, "none")
        };
        let indicator = match (active, self.view.direction) {
            (false, _) => "",
            (true, SortDirection::Asc) => " ▲",
            (true, SortDirection::Desc) => " ▼",
        };
        let href = self.href(1, field, direction)?;

        Ok(html! {
            th scope="col" aria-sort=(aria) { a href=(href) { (label) (indicator) } }
        })
    }

    fn pagination(&self, page: &PaginatedResult<CategoryDto>) -> ApplicationResult<Markup> {
        let (sort, direction) = (self.view.sort, self.view.direction);
        let previous = if page.has_previous() {
            Some(self.href(page.page - 1, sort, direction)?)
        } else {
            None
        };
        let next = if page.has_next() {
            Some(self.href(page.page + 1, sort, direction)?)
        } else {
            None
        };
        let noun = if page.total == 1 { "category" } else { "categories" };

        Ok(html! {
            nav class="pagination" aria-label="Pagination" {
                @if let Some(href) = &previous {
                    a rel="prev" href=(href) { "Previous" }
                }
                span class="page-status" { "Page " (page.page) " of " (page.total_pages.max(1)) }
                @if let Some(href) = &next {
                    a rel="next" href=(href) { "Next" }
                }
                span class="total" { (page.total) " " (noun) }
            }
        })
    }
}

fn row(item: &CategoryDto) -> Markup {
    html! {
        tr data-id=(item.id) {
            td { (item.name) }
            td { code { (item.slug) } }
            td { (item.description.as_deref().unwrap_or("—")) }
            td class="numeric" { (item.post_count) }
            td {
                time datetime=(item.updated_at.to_rfc3339()) {
                    (item.updated_at.format("%Y-%m-%d").to_string())
                }
            }
        }
    }
}
