use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};
use uuid::Uuid;

pub struct GetArticleQuery {
    pub id: Uuid,
}

impl ArticleQueryService {
    /// Cache-aside read. A cache hit is returned without consulting storage
    /// and is trusted even if the underlying row has since changed outside
    /// the invalidation path; staleness is bounded by the cache TTL.
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::from(query.id);

        if let Some(cached) = self.cache.get(id).await {
            return Ok(cached);
        }

        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let dto = ArticleDto::from(article);
        self.cache.set(&dto).await;
        Ok(dto)
    }
}
