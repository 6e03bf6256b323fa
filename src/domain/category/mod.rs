pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::BlogCategory;
pub use listing::{CategoryListQuery, CategoryPage, CategorySortField, SortDirection};
pub use repository::BlogCategoryRepository;
pub use value_objects::{CategoryId, CategoryName, CategorySlug};
