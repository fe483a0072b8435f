//! Main authentication service implementation

use std::sync::Arc;

use chrono::Utc;
use validator::ValidateEmail;

use crate::domain::entities::token::{
    access_token_duration, refresh_token_duration, RefreshToken, TokenPair,
};
use crate::domain::entities::user::{NewUser, UserId};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{RefreshTokenRepository, UserRepository};
use crate::services::token::{TokenCodec, TokenIssuer};

use super::config::AuthServiceConfig;

/// Authentication service for signup and login
pub struct AuthService<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Refresh token store written on login
    refresh_token_repository: Arc<R>,
    /// Token issuer for access and refresh tokens
    issuer: TokenIssuer,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, R> AuthService<U, R>
where
    U: UserRepository,
    R: RefreshTokenRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `refresh_token_repository` - Store for issued refresh tokens
    /// * `codec` - Codec used to sign issued tokens
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        refresh_token_repository: Arc<R>,
        codec: TokenCodec,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            refresh_token_repository,
            issuer: TokenIssuer::new(codec),
            config,
        }
    }

    /// Register a new user
    ///
    /// # Returns
    ///
    /// * `Ok(UserId)` - Id of the created user
    /// * `Err(DomainError::Validation)` - Bad email or empty password
    /// * `Err(AuthError::EmailAlreadyExists)` - Email is taken
    pub async fn signup(&self, email: &str, password: &str) -> DomainResult<UserId> {
        if !email.validate_email() {
            return Err(DomainError::Validation {
                message: format!("Invalid email address: {}", email),
            });
        }
        if password.is_empty() {
            return Err(DomainError::Validation {
                message: "Password must not be empty".to_string(),
            });
        }

        if self.user_repository.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        let password_hash = bcrypt::hash(password, self.config.bcrypt_cost).map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            DomainError::Internal {
                message: "Failed to hash password".to_string(),
            }
        })?;

        let user = self
            .user_repository
            .create(NewUser {
                email: email.to_string(),
                password: password_hash,
            })
            .await?;

        tracing::info!(event = "user_registered", user_id = user.id, "Registered new user");

        Ok(user.id)
    }

    /// Log in with email and password
    ///
    /// This method:
    /// 1. Loads the user by email and checks the password
    /// 2. Issues a 2 hour access token and a 14 day refresh token
    /// 3. Stores the refresh token, replacing the user's previous one
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Access and refresh tokens
    /// * `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                tracing::warn!(event = "login_failed", reason = "unknown_email", "Login rejected");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        // A stored hash bcrypt cannot parse counts as a mismatch
        if !bcrypt::verify(password, &user.password).unwrap_or(false) {
            tracing::warn!(
                event = "login_failed",
                reason = "bad_password",
                user_id = user.id,
                "Login rejected"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.issuer.issue(&user, access_token_duration())?;
        let refresh_ttl = refresh_token_duration();
        let refresh_token = self.issuer.issue(&user, refresh_ttl)?;

        self.refresh_token_repository
            .save(RefreshToken::new(
                user.id,
                refresh_token.clone(),
                Utc::now() + refresh_ttl,
            ))
            .await?;

        tracing::info!(event = "user_logged_in", user_id = user.id, "Issued token pair");

        Ok(TokenPair::new(access_token, refresh_token))
    }
}
