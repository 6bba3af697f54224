use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::ApplicationResult,
    },
    domain::article::{ArticleFilter, ArticleOrdering, PageRequest},
};

pub struct ListArticlesQuery {
    pub skip: u32,
    pub limit: u32,
    pub author: Option<String>,
    pub tag: Option<String>,
    pub order: ArticleOrdering,
}

impl ArticleQueryService {
    /// Listings always bypass the cache. `total` is computed over the whole
    /// filtered set, independent of the pagination window.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let limit = self.validate_page_limit(query.limit)?;
        let filter = ArticleFilter {
            author: query.author,
            tag: query.tag,
        };
        let page = PageRequest {
            skip: query.skip,
            limit,
        };

        let records = self.read_repo.list(&filter, page, query.order).await?;
        let total = self.read_repo.count(&filter).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, limit, query.skip))
    }
}
