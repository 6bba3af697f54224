// tests/support/mocks.rs
use async_trait::async_trait;
use byline::application::dto::ArticleDto;
use byline::application::ports::cache::ArticleCacheStore;
use byline::application::ports::time::Clock;
use byline::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleOrdering, ArticleReadRepository, ArticleUpdate,
    ArticleWriteRepository, NewArticle, PageRequest,
};
use byline::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, TimeZone, Utc};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/* -------------------------------- article repository -------------------------------- */

/// In-memory stand-in for the Postgres repositories. Enforces the same
/// unique (title, author) invariant the database constraint enforces.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<HashMap<Uuid, Article>>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a row directly, bypassing the service and its cache
    /// invalidation. Used to exercise the cache-aside staleness window.
    pub fn remove_row(&self, id: Uuid) {
        self.inner.lock().unwrap().remove(&id);
    }

    pub fn row(&self, id: Uuid) -> Option<Article> {
        self.inner.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    fn duplicate_exists(
        map: &HashMap<Uuid, Article>,
        id: Uuid,
        title: &str,
        author: &str,
    ) -> bool {
        map.values().any(|article| {
            Uuid::from(article.id) != id
                && article.title.as_str() == title
                && article.author.as_str() == author
        })
    }

    fn matches(article: &Article, filter: &ArticleFilter) -> bool {
        if let Some(author) = &filter.author {
            if article.author.as_str() != author {
                return false;
            }
        }
        if let Some(tag) = &filter.tag {
            if !article.tags.contains(tag) {
                return false;
            }
        }
        true
    }
}

fn compare_published(
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
    order: ArticleOrdering,
) -> Ordering {
    match order {
        // Descending, articles without a publication date last.
        ArticleOrdering::PublishedDesc => match (a, b) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        // Ascending, articles without a publication date first.
        ArticleOrdering::PublishedAsc => match (a, b) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        },
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();
        if Self::duplicate_exists(
            &map,
            Uuid::from(article.id),
            article.title.as_str(),
            article.author.as_str(),
        ) {
            return Err(DomainError::Conflict(
                "an article with the same title and author already exists".into(),
            ));
        }

        let stored = Article {
            id: article.id,
            title: article.title,
            body: article.body,
            tags: article.tags,
            author: article.author,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        map.insert(Uuid::from(stored.id), stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut map = self.inner.lock().unwrap();
        let id = Uuid::from(update.id);
        let current = map
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        let next_title = update.title.unwrap_or_else(|| current.title.clone());
        let next_author = update.author.unwrap_or_else(|| current.author.clone());
        if Self::duplicate_exists(&map, id, next_title.as_str(), next_author.as_str()) {
            return Err(DomainError::Conflict(
                "an article with the same title and author already exists".into(),
            ));
        }

        let article = map.get_mut(&id).expect("row checked above");
        article.title = next_title;
        article.author = next_author;
        if let Some(body) = update.body {
            article.body = body;
        }
        if let Some(tags) = update.tags {
            article.tags = tags;
        }
        if let Some(published_at) = update.published_at {
            article.published_at = Some(published_at);
        }
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut map = self.inner.lock().unwrap();
        map.remove(&Uuid::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&Uuid::from(id)).cloned())
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
        order: ArticleOrdering,
    ) -> DomainResult<Vec<Article>> {
        let map = self.inner.lock().unwrap();
        let mut rows: Vec<Article> = map
            .values()
            .filter(|article| Self::matches(article, filter))
            .cloned()
            .collect();
        rows.sort_by(|a, b| compare_published(a.published_at, b.published_at, order));
        Ok(rows
            .into_iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .collect())
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .filter(|article| Self::matches(article, filter))
            .count() as u64)
    }
}

/* -------------------------------- article cache -------------------------------- */

/// In-memory cache storing the same serialized payloads the Redis adapter
/// would, so decode behavior can be exercised without a running Redis.
#[derive(Default)]
pub struct InMemoryArticleCache {
    inner: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryArticleCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(id: Uuid) -> String {
        format!("article:{id}")
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.inner.lock().unwrap().contains_key(&Self::key(id))
    }

    /// Overwrite an entry with an arbitrary raw payload.
    pub fn poison(&self, id: Uuid, payload: &[u8]) {
        self.inner
            .lock()
            .unwrap()
            .insert(Self::key(id), payload.to_vec());
    }

    pub fn clear(&self) {
        self.inner.lock().unwrap().clear();
    }
}

#[async_trait]
impl ArticleCacheStore for InMemoryArticleCache {
    async fn get(&self, id: ArticleId) -> Option<ArticleDto> {
        let map = self.inner.lock().unwrap();
        map.get(&Self::key(Uuid::from(id)))
            .and_then(|raw| serde_json::from_slice(raw).ok())
    }

    async fn set(&self, article: &ArticleDto) {
        let payload = serde_json::to_vec(article).expect("article snapshot serializes");
        self.inner
            .lock()
            .unwrap()
            .insert(Self::key(article.id), payload);
    }

    async fn invalidate(&self, id: ArticleId) {
        self.inner.lock().unwrap().remove(&Self::key(Uuid::from(id)));
    }
}

/* -------------------------------- clock -------------------------------- */

/// Deterministic clock advancing one second per observation, so successive
/// mutations always carry strictly increasing timestamps.
pub struct SteppingClock {
    base: DateTime<Utc>,
    ticks: Mutex<i64>,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            base: Utc.with_ymd_and_hms(2024, 9, 16, 8, 0, 0).unwrap(),
            ticks: Mutex::new(0),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut ticks = self.ticks.lock().unwrap();
        *ticks += 1;
        self.base + chrono::Duration::seconds(*ticks)
    }
}
