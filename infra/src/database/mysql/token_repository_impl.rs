//! MySQL implementation of the RefreshTokenRepository trait.
//!
//! `refresh_token.user_id` carries a unique key, so a save for a user that
//! already has a row updates that row in place.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use blog_core::domain::entities::token::RefreshToken;
use blog_core::domain::entities::user::UserId;
use blog_core::errors::DomainError;
use blog_core::repositories::RefreshTokenRepository;

use super::column;
use crate::InfrastructureError;

const SELECT_COLUMNS: &str = "SELECT id, user_id, refresh_token, expires_at FROM refresh_token";

/// MySQL implementation of RefreshTokenRepository
pub struct MySqlRefreshTokenRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRefreshTokenRepository {
    /// Create a new MySQL refresh token repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to RefreshToken entity
    fn row_to_token(row: &MySqlRow) -> Result<RefreshToken, InfrastructureError> {
        Ok(RefreshToken {
            id: column(row, "id")?,
            user_id: column(row, "user_id")?,
            refresh_token: column(row, "refresh_token")?,
            expires_at: column(row, "expires_at")?,
        })
    }
}

#[async_trait]
impl RefreshTokenRepository for MySqlRefreshTokenRepository {
    async fn find_by_refresh_token(&self, refresh_token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE refresh_token = ? LIMIT 1", SELECT_COLUMNS))
            .bind(refresh_token)
            .fetch_optional(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(row.as_ref().map(Self::row_to_token).transpose()?)
    }

    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<RefreshToken>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE user_id = ? LIMIT 1", SELECT_COLUMNS))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(row.as_ref().map(Self::row_to_token).transpose()?)
    }

    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO refresh_token (user_id, refresh_token, expires_at)
            VALUES (?, ?, ?)
            ON DUPLICATE KEY UPDATE
                refresh_token = VALUES(refresh_token),
                expires_at = VALUES(expires_at)
            "#,
        )
        .bind(token.user_id)
        .bind(&token.refresh_token)
        .bind(token.expires_at)
        .execute(&self.pool)
        .await
        .map_err(InfrastructureError::from)?;

        tracing::debug!(user_id = token.user_id, "Stored refresh token");

        self.find_by_user_id(token.user_id).await?.ok_or_else(|| {
            DomainError::Internal {
                message: format!("Refresh token for user {} vanished after save", token.user_id),
            }
        })
    }
}
