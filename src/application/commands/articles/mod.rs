mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;

use crate::application::error::ApplicationError;
use crate::domain::errors::DomainError;

/// A unique-constraint violation surfaced by the repository becomes the
/// domain-level "already exists" failure; everything else passes through.
pub(super) fn map_write_conflict(err: DomainError) -> ApplicationError {
    match err {
        DomainError::Conflict(_) => ApplicationError::conflict(
            "an article with the same title and author already exists",
        ),
        other => other.into(),
    }
}
