use crate::domain::errors::DomainError;

const CNT_ARTICLE_TITLE_AUTHOR: &str = "uq_articles_title_author";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_TITLE_AUTHOR => DomainError::Conflict(
                        "an article with the same title and author already exists".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                if code.as_ref() == "23505" {
                    return DomainError::Conflict("unique constraint violated".into());
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
