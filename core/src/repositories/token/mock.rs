//! In-memory implementation of RefreshTokenRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshToken;
use crate::domain::entities::user::UserId;
use crate::errors::DomainError;

use super::r#trait::RefreshTokenRepository;

/// Mock refresh token repository keyed by user id
#[derive(Clone)]
pub struct MockRefreshTokenRepository {
    tokens: Arc<RwLock<HashMap<UserId, RefreshToken>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockRefreshTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }
}

impl Default for MockRefreshTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn find_by_refresh_token(&self, refresh_token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens
            .values()
            .find(|t| t.refresh_token == refresh_token)
            .cloned())
    }

    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(&user_id).cloned())
    }

    async fn save(&self, mut token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        match tokens.get_mut(&token.user_id) {
            Some(existing) => {
                existing.update(token.refresh_token, token.expires_at);
                Ok(existing.clone())
            }
            None => {
                let mut next_id = self.next_id.write().await;
                token.id = *next_id;
                *next_id += 1;
                tokens.insert(token.user_id, token.clone());
                Ok(token)
            }
        }
    }
}
