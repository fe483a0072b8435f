//! Refresh token exchange

use std::sync::Arc;

use crate::domain::entities::token::access_token_duration;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{RefreshTokenRepository, UserRepository};

use super::codec::TokenCodec;
use super::issuer::TokenIssuer;
use super::validator::TokenValidator;

/// Exchanges a stored refresh token for a new access token
pub struct TokenRefreshService<R, U>
where
    R: RefreshTokenRepository,
    U: UserRepository,
{
    /// Refresh token store
    refresh_token_repository: Arc<R>,
    /// User lookup
    user_repository: Arc<U>,
    validator: TokenValidator,
    issuer: TokenIssuer,
}

impl<R, U> TokenRefreshService<R, U>
where
    R: RefreshTokenRepository,
    U: UserRepository,
{
    /// Creates a new refresh service
    ///
    /// # Arguments
    ///
    /// * `refresh_token_repository` - Store mapping refresh tokens to users
    /// * `user_repository` - Repository used to load the token owner
    /// * `codec` - Codec shared with the issuer and validator
    pub fn new(refresh_token_repository: Arc<R>, user_repository: Arc<U>, codec: TokenCodec) -> Self {
        Self {
            refresh_token_repository,
            user_repository,
            validator: TokenValidator::new(codec.clone()),
            issuer: TokenIssuer::new(codec),
        }
    }

    /// Issues a new access token for the owner of `refresh_token`
    ///
    /// This method:
    /// 1. Rejects tokens that fail signature or expiry checks
    /// 2. Finds the stored record holding exactly this token string
    /// 3. Loads the user that record points at
    /// 4. Issues an access token for that user
    ///
    /// The refresh token is not rotated and nothing is written.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - New access token
    /// * `Err(TokenError::InvalidRefreshToken)` - Bad signature, malformed or expired
    /// * `Err(TokenError::UnknownRefreshToken)` - No stored record holds the token
    /// * `Err(AuthError::UserNotFound)` - The record points at a missing user
    pub async fn create_new_access_token(&self, refresh_token: &str) -> Result<String, DomainError> {
        if !self.validator.is_valid(refresh_token) {
            tracing::warn!(event = "refresh_rejected", reason = "invalid", "Refresh token failed validation");
            return Err(TokenError::InvalidRefreshToken.into());
        }

        // The embedded id claim is not trusted; ownership comes from the store.
        let record = self
            .refresh_token_repository
            .find_by_refresh_token(refresh_token)
            .await?
            .ok_or_else(|| {
                tracing::warn!(event = "refresh_rejected", reason = "unknown", "Refresh token not found in store");
                DomainError::from(TokenError::UnknownRefreshToken)
            })?;

        let user = self
            .user_repository
            .find_by_id(record.user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(
                    event = "refresh_rejected",
                    reason = "orphaned",
                    user_id = record.user_id,
                    "Refresh token points at a missing user"
                );
                DomainError::from(AuthError::UserNotFound)
            })?;

        let access_token = self.issuer.issue(&user, access_token_duration())?;

        tracing::info!(event = "access_token_refreshed", user_id = user.id, "Issued new access token");

        Ok(access_token)
    }
}
