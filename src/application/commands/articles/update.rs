use super::{ArticleCommandService, map_write_conflict};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleBody, ArticleId, ArticleTags, ArticleTitle, ArticleUpdate, AuthorName,
    },
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub struct UpdateArticleCommand {
    pub id: Uuid,
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::from(command.id);

        // The existence check always goes to storage, never the cache.
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        let mut update = ArticleUpdate::new(id, self.clock.now());
        if let Some(title) = command.title {
            update = update.with_title(ArticleTitle::new(title)?);
        }
        if let Some(body) = command.body {
            update = update.with_body(ArticleBody::new(body)?);
        }
        if let Some(tags) = command.tags {
            update = update.with_tags(ArticleTags::new(tags));
        }
        if let Some(author) = command.author {
            update = update.with_author(AuthorName::new(author)?);
        }
        if let Some(published_at) = command.published_at {
            update = update.with_published_at(published_at);
        }

        let updated = self
            .write_repo
            .update(update)
            .await
            .map_err(map_write_conflict)?;

        let dto = ArticleDto::from(updated);
        self.cache.set(&dto).await;
        Ok(dto)
    }
}
