//! Article use cases

use std::sync::Arc;

use crate::domain::entities::article::{Article, NewArticle};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ArticleRepository;

/// Input for creating an article
#[derive(Debug, Clone)]
pub struct AddArticle {
    pub title: String,
    pub content: String,
}

/// Input for replacing an article's title and content
#[derive(Debug, Clone)]
pub struct UpdateArticle {
    pub title: String,
    pub content: String,
}

fn require_text(title: &str, content: &str) -> DomainResult<()> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(DomainError::Validation {
            message: "Title and content must not be empty".to_string(),
        });
    }
    Ok(())
}

/// CRUD over blog articles
pub struct BlogService<A: ArticleRepository> {
    article_repository: Arc<A>,
}

impl<A: ArticleRepository> BlogService<A> {
    pub fn new(article_repository: Arc<A>) -> Self {
        Self { article_repository }
    }

    /// Store a new article
    pub async fn save(&self, request: AddArticle) -> DomainResult<Article> {
        require_text(&request.title, &request.content)?;

        let article = self
            .article_repository
            .save(NewArticle::new(request.title, request.content))
            .await?;

        tracing::info!(event = "article_created", article_id = article.id, "Created article");
        Ok(article)
    }

    pub async fn find_all(&self) -> DomainResult<Vec<Article>> {
        self.article_repository.find_all().await
    }

    /// Load one article
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::NotFound)` - With resource `"not found: {id}"`
    pub async fn find_by_id(&self, id: i64) -> DomainResult<Article> {
        self.article_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id))
    }

    /// Delete an article; deleting a missing article is not an error
    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if self.article_repository.delete_by_id(id).await? {
            tracing::info!(event = "article_deleted", article_id = id, "Deleted article");
        }
        Ok(())
    }

    /// Replace title and content of an existing article
    pub async fn update(&self, id: i64, request: UpdateArticle) -> DomainResult<Article> {
        require_text(&request.title, &request.content)?;

        let mut article = self.find_by_id(id).await?;
        article.update(request.title, request.content);

        self.article_repository.update(article).await
    }
}
