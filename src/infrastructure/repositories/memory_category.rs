// src/infrastructure/repositories/memory_category.rs
use crate::domain::category::{
    BlogCategory, BlogCategoryRepository, CategoryId, CategoryListQuery, CategoryName,
    CategoryPage, CategorySlug, CategorySortField, SortDirection,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::cmp::Ordering;
use tokio::sync::RwLock;

/// Process-local category store, used when no database is configured.
#[derive(Default)]
pub struct InMemoryBlogCategoryRepository {
    categories: RwLock<Vec<BlogCategory>>,
}

impl InMemoryBlogCategoryRepository {
    pub fn new(categories: Vec<BlogCategory>) -> Self {
        Self {
            categories: RwLock::new(categories),
        }
    }

    /// A handful of categories so the console has something to show in development.
    pub fn seeded(now: DateTime<Utc>) -> DomainResult<Self> {
        let seed = [
            ("Announcements", "announcements", Some("Release notes and news"), 12),
            ("Engineering", "engineering", Some("Deep dives from the team"), 31),
            ("Guides", "guides", Some("Step-by-step tutorials"), 18),
            ("Community", "community", None, 7),
            ("Events", "events", Some("Meetups and conferences"), 4),
        ];

        let mut categories = Vec::with_capacity(seed.len());
        for (offset, (name, slug, description, posts)) in (1_i64..).zip(seed) {
            let created_at = now - Duration::days(60 - offset * 7);
            categories.push(BlogCategory {
                id: CategoryId::new(offset)?,
                name: CategoryName::new(name)?,
                slug: CategorySlug::new(slug)?,
                description: description.map(str::to_string),
                post_count: posts,
                created_at,
                updated_at: created_at + Duration::days(offset),
            });
        }
        Ok(Self::new(categories))
    }

    pub async fn insert(&self, category: BlogCategory) {
        self.categories.write().await.push(category);
    }
}

fn matches_search(category: &BlogCategory, needle: &str) -> bool {
    category.name.as_str().to_lowercase().contains(needle)
        || category.slug.as_str().contains(needle)
}

fn compare(a: &BlogCategory, b: &BlogCategory, field: CategorySortField) -> Ordering {
    match field {
        CategorySortField::Name => a.name.as_str().cmp(b.name.as_str()),
        CategorySortField::Slug => a.slug.as_str().cmp(b.slug.as_str()),
        CategorySortField::PostCount => a.post_count.cmp(&b.post_count),
        CategorySortField::CreatedAt => a.created_at.cmp(&b.created_at),
        CategorySortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

#[async_trait]
impl BlogCategoryRepository for InMemoryBlogCategoryRepository {
    async fn list_page(&self, query: &CategoryListQuery) -> DomainResult<CategoryPage> {
        let guard = self.categories.read().await;
        let needle = query.search.as_deref().map(str::to_lowercase);

        let mut matching: Vec<&BlogCategory> = guard
            .iter()
            .filter(|c| needle.as_deref().is_none_or(|n| matches_search(c, n)))
            .collect();

        matching.sort_by(|a, b| {
            let primary = compare(a, b, query.sort);
            let primary = match query.direction {
                SortDirection::Asc => primary,
                SortDirection::Desc => primary.reverse(),
            };
            primary.then_with(|| a.id.cmp(&b.id))
        });

        let total = matching.len() as u64;
        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(query.page_size as usize)
            .cloned()
            .collect();

        Ok(CategoryPage { items, total })
    }
}
