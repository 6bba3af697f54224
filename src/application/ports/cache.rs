// src/application/ports/cache.rs
use crate::application::dto::ArticleDto;
use crate::domain::article::ArticleId;
use async_trait::async_trait;

/// Time-bounded cache for article snapshots.
///
/// Implementations absorb every failure: an unreachable backend or an
/// undecodable payload reads as a miss, `set` and `invalidate` degrade to
/// no-ops. The read path must never fail because of the cache.
#[async_trait]
pub trait ArticleCacheStore: Send + Sync {
    async fn get(&self, id: ArticleId) -> Option<ArticleDto>;
    async fn set(&self, article: &ArticleDto);
    async fn invalidate(&self, id: ArticleId);
}
