// src/infrastructure/repositories/postgres_category.rs
use super::map_sqlx;
use crate::domain::category::{
    BlogCategory, BlogCategoryRepository, CategoryId, CategoryListQuery, CategoryName,
    CategoryPage, CategorySlug, CategorySortField, SortDirection,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresBlogCategoryRepository {
    pool: PgPool,
}

impl PostgresBlogCategoryRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    description: Option<String>,
    post_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for BlogCategory {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: CategorySlug::new(row.slug)?,
            description: row.description,
            post_count: row.post_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const fn sort_column(field: CategorySortField) -> &'static str {
    match field {
        CategorySortField::Name => "name",
        CategorySortField::Slug => "slug",
        CategorySortField::PostCount => "post_count",
        CategorySortField::CreatedAt => "created_at",
        CategorySortField::UpdatedAt => "updated_at",
    }
}

const fn sort_keyword(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    }
}

fn push_search_filter(builder: &mut QueryBuilder<'_, Postgres>, search: Option<&str>) {
    if let Some(term) = search {
        let pattern = format!("%{}%", escape_like(term));
        builder.push(" WHERE (name ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" ESCAPE '\\' OR slug ILIKE ");
        builder.push_bind(pattern);
        builder.push(" ESCAPE '\\')");
    }
}

fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[async_trait]
impl BlogCategoryRepository for PostgresBlogCategoryRepository {
    async fn list_page(&self, query: &CategoryListQuery) -> DomainResult<CategoryPage> {
        let search = query.search.as_deref();

        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM blog_categories");
        push_search_filter(&mut count, search);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut select: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, name, slug, description, post_count, created_at, updated_at FROM blog_categories",
        );
        push_search_filter(&mut select, search);
        select.push(" ORDER BY ");
        select.push(sort_column(query.sort));
        select.push(" ");
        select.push(sort_keyword(query.direction));
        select.push(", id ASC LIMIT ");
        select.push_bind(i64::from(query.page_size));
        select.push(" OFFSET ");
        select.push_bind(i64::try_from(query.offset()).unwrap_or(i64::MAX));

        let rows = select
            .build_query_as::<CategoryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(BlogCategory::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(CategoryPage {
            items,
            total: u64::try_from(total).unwrap_or_default(),
        })
    }
}
