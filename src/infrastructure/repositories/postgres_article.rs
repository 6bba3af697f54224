// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleFilter, ArticleId, ArticleOrdering, ArticleReadRepository,
    ArticleTags, ArticleTitle, ArticleUpdate, ArticleWriteRepository, AuthorName, NewArticle,
    PageRequest,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    body: String,
    tags: Vec<String>,
    author: String,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::from(row.id),
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            tags: ArticleTags::new(row.tags),
            author: AuthorName::new(row.author)?,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            id,
            title,
            body,
            tags,
            author,
            published_at,
            created_at,
            updated_at,
        } = article;

        // Single atomic statement: the unique constraint on (title, author)
        // is checked here, and server-stored fields come back via RETURNING.
        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (id, title, body, tags, author, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, title, body, tags, author, published_at, created_at, updated_at",
        )
        .bind(Uuid::from(id))
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(tags.as_slice())
        .bind(author.as_str())
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            body,
            tags,
            author,
            published_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(body.into_inner());
        }

        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tags.into_inner());
        }

        if let Some(author) = author {
            builder.push(", author = ");
            builder.push_bind(author.into_inner());
        }

        if let Some(published_at) = published_at {
            builder.push(", published_at = ");
            builder.push_bind(published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" RETURNING id, title, body, tags, author, published_at, created_at, updated_at");

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn apply_filters<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ArticleFilter) {
        let mut has_where = false;

        if let Some(author) = &filter.author {
            builder.push(" WHERE author = ");
            builder.push_bind(author.as_str());
            has_where = true;
        }

        if let Some(tag) = &filter.tag {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push_bind(tag.as_str());
            builder.push(" = ANY(tags)");
        }
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, order: ArticleOrdering) {
        builder.push(match order {
            ArticleOrdering::PublishedDesc => " ORDER BY published_at DESC NULLS LAST",
            ArticleOrdering::PublishedAsc => " ORDER BY published_at ASC NULLS FIRST",
        });
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, body, tags, author, published_at, created_at, updated_at
             FROM articles WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
        order: ArticleOrdering,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, title, body, tags, author, published_at, created_at, updated_at FROM articles",
        );
        Self::apply_filters(&mut builder, filter);
        Self::apply_ordering(&mut builder, order);
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(page.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(page.skip));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles");
        Self::apply_filters(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(total as u64)
    }
}
