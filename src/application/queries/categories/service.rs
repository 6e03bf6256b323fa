use std::sync::Arc;

use crate::domain::category::BlogCategoryRepository;

pub struct CategoryQueryService {
    pub(super) repo: Arc<dyn BlogCategoryRepository>,
    pub(super) default_page_size: u32,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn BlogCategoryRepository>, default_page_size: u32) -> Self {
        Self {
            repo,
            default_page_size,
        }
    }
}
