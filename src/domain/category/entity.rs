use super::value_objects::{CategoryId, CategoryName, CategorySlug};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct BlogCategory {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub description: Option<String>,
    pub post_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
