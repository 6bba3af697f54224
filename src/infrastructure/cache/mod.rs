mod redis_article_cache;

pub use redis_article_cache::{DEFAULT_CACHE_TTL, RedisArticleCache};
