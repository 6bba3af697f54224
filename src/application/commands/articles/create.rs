// src/application/commands/articles/create.rs
use super::{ArticleCommandService, map_write_conflict};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleBody, ArticleId, ArticleTags, ArticleTitle, AuthorName, NewArticle},
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub author: String,
    pub published_at: Option<DateTime<Utc>>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    tags: Vec<String>,
    author: Option<String>,
    published_at: Option<DateTime<Utc>>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            tags: self.tags,
            author: self.author.ok_or("author is required")?,
            published_at: self.published_at,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let author = AuthorName::new(command.author)?;
        let tags = ArticleTags::new(command.tags);
        let now = self.clock.now();

        let new_article = NewArticle {
            id: ArticleId::generate(),
            title,
            body,
            tags,
            author,
            published_at: command.published_at,
            created_at: now,
            updated_at: now,
        };

        // Uniqueness of (title, author) is checked by the storage engine at
        // insert time; racing creates are settled there, not by a pre-query.
        let created = self
            .write_repo
            .insert(new_article)
            .await
            .map_err(map_write_conflict)?;

        let dto = ArticleDto::from(created);
        self.cache.set(&dto).await;
        Ok(dto)
    }
}
