//! MySQL implementation of the ArticleRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use blog_core::domain::entities::article::{Article, NewArticle};
use blog_core::errors::DomainError;
use blog_core::repositories::ArticleRepository;

use super::column;
use crate::InfrastructureError;

/// MySQL implementation of ArticleRepository over the `article` table
pub struct MySqlArticleRepository {
    pool: MySqlPool,
}

impl MySqlArticleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_article(row: &MySqlRow) -> Result<Article, InfrastructureError> {
        Ok(Article {
            id: column(row, "id")?,
            title: column(row, "title")?,
            content: column(row, "content")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl ArticleRepository for MySqlArticleRepository {
    async fn save(&self, article: NewArticle) -> Result<Article, DomainError> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO article (title, content, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        Ok(Article {
            id: result.last_insert_id() as i64,
            title: article.title,
            content: article.content,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_all(&self) -> Result<Vec<Article>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, title, content, created_at, updated_at FROM article ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        tracing::debug!(count = rows.len(), "Loaded articles");

        Ok(rows
            .iter()
            .map(Self::row_to_article)
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, DomainError> {
        let row = sqlx::query(
            "SELECT id, title, content, created_at, updated_at FROM article WHERE id = ? LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        Ok(row.as_ref().map(Self::row_to_article).transpose()?)
    }

    async fn update(&self, article: Article) -> Result<Article, DomainError> {
        let result = sqlx::query(
            "UPDATE article SET title = ?, content = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(article.updated_at)
        .bind(article.id)
        .execute(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        if result.rows_affected() == 0 && self.find_by_id(article.id).await?.is_none() {
            return Err(DomainError::not_found(article.id));
        }

        Ok(article)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM article WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
