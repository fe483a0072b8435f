use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use blog_core::domain::entities::article::Article;
use blog_core::services::{AddArticle, UpdateArticle};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddArticleRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
}

impl From<AddArticleRequest> for AddArticle {
    fn from(request: AddArticleRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateArticleRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
}

impl From<UpdateArticleRequest> for UpdateArticle {
    fn from(request: UpdateArticleRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
        }
    }
}

/// Title and content only, as returned by the read endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub title: String,
    pub content: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            title: article.title,
            content: article.content,
        }
    }
}

/// Full article, returned after a write
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
