// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};
use uuid::Uuid;

pub struct DeleteArticleCommand {
    pub id: Uuid,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::from(command.id);

        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        self.write_repo.delete(id).await?;
        // Invalidate unconditionally, whether or not an entry was cached.
        self.cache.invalidate(id).await;
        Ok(())
    }
}
