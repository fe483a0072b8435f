//! Refresh token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::domain::entities::user::UserId;
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// The store keeps at most one record per user. Lookups by token value
/// match the literal string handed to the client.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Find the record holding exactly this refresh token string
    ///
    /// # Arguments
    /// * `refresh_token` - The refresh token as presented by the client
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Record found
    /// * `Ok(None)` - No record holds this token
    /// * `Err(DomainError)` - Database error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use blog_core::repositories::RefreshTokenRepository;
    /// # async fn example(repo: &impl RefreshTokenRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// match repo.find_by_refresh_token("eyJ...").await? {
    ///     Some(record) => println!("Token belongs to user {}", record.user_id),
    ///     None => println!("Token not found"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn find_by_refresh_token(&self, refresh_token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Find the record for a user
    ///
    /// # Arguments
    /// * `user_id` - The numeric user id
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - The user's current record
    /// * `Ok(None)` - The user has no refresh token
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<RefreshToken>, DomainError>;

    /// Insert or overwrite the record for `token.user_id`
    ///
    /// An existing record for the same user keeps its id and gets the new
    /// token value and expiry.
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The stored record with its id assigned
    /// * `Err(DomainError)` - Save failed
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;
}
