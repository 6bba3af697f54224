use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::cache::ArticleCacheStore;
use crate::domain::article::ArticleReadRepository;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) cache: Arc<dyn ArticleCacheStore>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, cache: Arc<dyn ArticleCacheStore>) -> Self {
        Self { read_repo, cache }
    }

    pub(super) fn validate_page_limit(&self, limit: u32) -> ApplicationResult<u32> {
        const MIN_LIMIT: u32 = 1;
        const MAX_LIMIT: u32 = 100;

        if (MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            Ok(limit)
        } else {
            Err(ApplicationError::validation(format!(
                "limit must be between {MIN_LIMIT} and {MAX_LIMIT}"
            )))
        }
    }
}
