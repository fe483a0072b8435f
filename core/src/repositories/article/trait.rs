//! Article repository trait.

use async_trait::async_trait;

use crate::domain::entities::article::{Article, NewArticle};
use crate::errors::DomainError;

/// Repository trait for Article persistence operations
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Store a new article, assigning id and timestamps
    async fn save(&self, article: NewArticle) -> Result<Article, DomainError>;

    /// All articles ordered by id
    async fn find_all(&self) -> Result<Vec<Article>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, DomainError>;

    /// Persist title, content and `updated_at` of an existing article
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No article with that id
    async fn update(&self, article: Article) -> Result<Article, DomainError>;

    /// Delete an article
    ///
    /// # Returns
    /// * `Ok(true)` - Article deleted
    /// * `Ok(false)` - Article did not exist
    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError>;
}
