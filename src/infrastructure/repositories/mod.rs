// src/infrastructure/repositories/mod.rs
mod error;
mod memory_category;
mod postgres_category;

pub use error::map_sqlx;
pub use memory_category::InMemoryBlogCategoryRepository;
pub use postgres_category::PostgresBlogCategoryRepository;
