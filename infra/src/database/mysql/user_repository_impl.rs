//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use blog_core::domain::entities::user::{NewUser, User, UserId};
use blog_core::errors::{AuthError, DomainError};
use blog_core::repositories::UserRepository;

use super::column;
use crate::InfrastructureError;

/// MySQL implementation of UserRepository over the `users` table
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, InfrastructureError> {
        Ok(User {
            id: column(row, "id")?,
            email: column(row, "email")?,
            password: column(row, "password")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        tracing::debug!(user_id = id, "Loading user by id");

        let row = sqlx::query("SELECT id, email, password FROM users WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(row.as_ref().map(Self::row_to_user).transpose()?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        tracing::debug!("Loading user by email");

        let row = sqlx::query("SELECT id, email, password FROM users WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(InfrastructureError::from)?;

        Ok(row.as_ref().map(Self::row_to_user).transpose()?)
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let result = sqlx::query("INSERT INTO users (email, password) VALUES (?, ?)")
            .bind(&user.email)
            .bind(&user.password)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::from(AuthError::EmailAlreadyExists)
                }
                other => InfrastructureError::from(other).into(),
            })?;

        let id = result.last_insert_id() as UserId;
        tracing::debug!(user_id = id, "Inserted user");

        Ok(User::new(id, user.email, user.password))
    }
}
