mod list;
mod service;

pub use list::{ListCategoriesQuery, MAX_PAGE_SIZE};
pub use service::CategoryQueryService;
