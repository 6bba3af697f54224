// src/infrastructure/cache/redis_article_cache.rs
use crate::application::dto::ArticleDto;
use crate::application::error::ApplicationError;
use crate::application::ports::cache::ArticleCacheStore;
use crate::domain::article::ArticleId;
use async_trait::async_trait;
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;
use std::time::Duration;

/// Cached snapshots expire after this long unless invalidated first.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(120);

#[derive(Clone)]
pub struct RedisArticleCache {
    pool: Pool,
    ttl: Duration,
}

impl RedisArticleCache {
    /// Create a Redis backed article cache from a redis URL
    /// (e.g. redis://:password@host:6379/0).
    pub fn from_url(url: &str, ttl: Duration) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool, ttl })
    }

    fn key(id: ArticleId) -> String {
        format!("article:{id}")
    }

    async fn connection(&self) -> Option<Connection> {
        match self.pool.get().await {
            Ok(conn) => Some(conn),
            Err(err) => {
                tracing::warn!(error = %err, "article cache unavailable, degrading to storage");
                None
            }
        }
    }
}

/// A payload that fails to decode is treated as a miss, never a hard error;
/// the read path falls through to authoritative storage.
fn decode(raw: &[u8]) -> Option<ArticleDto> {
    match serde_json::from_slice(raw) {
        Ok(dto) => Some(dto),
        Err(err) => {
            tracing::debug!(error = %err, "discarding undecodable article cache payload");
            None
        }
    }
}

#[async_trait]
impl ArticleCacheStore for RedisArticleCache {
    async fn get(&self, id: ArticleId) -> Option<ArticleDto> {
        let mut conn = self.connection().await?;

        let raw: Option<Vec<u8>> = match conn.get(Self::key(id)).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, article_id = %id, "article cache read failed");
                return None;
            }
        };

        raw.as_deref().and_then(decode)
    }

    async fn set(&self, article: &ArticleDto) {
        let payload = match serde_json::to_vec(article) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize article cache payload");
                return;
            }
        };

        let Some(mut conn) = self.connection().await else {
            return;
        };

        let key = Self::key(ArticleId::from(article.id));
        if let Err(err) = conn
            .set_ex::<_, _, ()>(key, payload, self.ttl.as_secs())
            .await
        {
            tracing::warn!(error = %err, article_id = %article.id, "article cache write failed");
        }
    }

    async fn invalidate(&self, id: ArticleId) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        if let Err(err) = conn.del::<_, ()>(Self::key(id)).await {
            tracing::warn!(error = %err, article_id = %id, "article cache invalidation failed");
        }
    }
}
