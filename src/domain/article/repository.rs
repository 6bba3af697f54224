use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Filter predicate shared by `list` and `count`. Both conditions combine
/// with AND semantics; `tag` matches whole elements of the tag array.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub author: Option<String>,
    pub tag: Option<String>,
}

/// Ordering over `published_at`. Descending places articles without a
/// publication date last, ascending places them first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleOrdering {
    #[default]
    PublishedDesc,
    PublishedAsc,
}

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub skip: u32,
    pub limit: u32,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn list(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
        order: ArticleOrdering,
    ) -> DomainResult<Vec<Article>>;
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64>;
}
