pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{
    ArticleFilter, ArticleOrdering, ArticleReadRepository, ArticleWriteRepository, PageRequest,
};
pub use value_objects::{ArticleBody, ArticleId, ArticleTags, ArticleTitle, AuthorName};
