//! Mock implementation of ArticleRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::article::{Article, NewArticle};
use crate::errors::DomainError;

use super::trait_::ArticleRepository;

/// Mock article repository for testing
#[derive(Clone)]
pub struct MockArticleRepository {
    articles: Arc<RwLock<BTreeMap<i64, Article>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockArticleRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            articles: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }
}

impl Default for MockArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleRepository for MockArticleRepository {
    async fn save(&self, article: NewArticle) -> Result<Article, DomainError> {
        let mut articles = self.articles.write().await;
        let mut next_id = self.next_id.write().await;

        let now = Utc::now();
        let created = Article {
            id: *next_id,
            title: article.title,
            content: article.content,
            created_at: now,
            updated_at: now,
        };
        *next_id += 1;

        articles.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<Article>, DomainError> {
        let articles = self.articles.read().await;
        Ok(articles.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Article>, DomainError> {
        let articles = self.articles.read().await;
        Ok(articles.get(&id).cloned())
    }

    async fn update(&self, article: Article) -> Result<Article, DomainError> {
        let mut articles = self.articles.write().await;

        if !articles.contains_key(&article.id) {
            return Err(DomainError::not_found(article.id));
        }

        articles.insert(article.id, article.clone());
        Ok(article)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut articles = self.articles.write().await;
        Ok(articles.remove(&id).is_some())
    }
}
