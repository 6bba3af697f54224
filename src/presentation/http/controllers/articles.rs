// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, Page},
    queries::articles::{GetArticleQuery, ListArticlesQuery},
};
use crate::domain::article::ArticleOrdering;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequireApiKey;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

fn default_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderParam {
    Asc,
    #[default]
    Desc,
}

impl From<OrderParam> for ArticleOrdering {
    fn from(value: OrderParam) -> Self {
        match value {
            OrderParam::Asc => Self::PublishedAsc,
            OrderParam::Desc => Self::PublishedDesc,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub order: OrderParam,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub body: String,
    #[serde(default, deserialize_with = "tag_list::deserialize")]
    pub tags: Vec<String>,
    pub author: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(default, deserialize_with = "tag_list::option")]
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Tags arrive either as a JSON list or as a single `;`-separated string;
/// both forms collapse to the same list shape here. Trimming and dropping
/// of empty entries happens in the domain.
mod tag_list {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTags {
        List(Vec<String>),
        Joined(String),
    }

    fn flatten(raw: RawTags) -> Vec<String> {
        match raw {
            RawTags::List(tags) => tags,
            RawTags::Joined(joined) => joined.split(';').map(str::to_string).collect(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(flatten(RawTags::deserialize(deserializer)?))
    }

    pub fn option<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<RawTags>::deserialize(deserializer)?.map(flatten))
    }
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    _auth: RequireApiKey,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            skip: params.skip,
            limit: params.limit,
            author: params.author,
            tag: params.tag,
            order: params.order.into(),
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    _auth: RequireApiKey,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        body: payload.body,
        tags: payload.tags,
        author: payload.author,
        published_at: payload.published_at,
    };

    let dto = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        body: payload.body,
        tags: payload.tags,
        author: payload.author,
        published_at: payload.published_at,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    _auth: RequireApiKey,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
