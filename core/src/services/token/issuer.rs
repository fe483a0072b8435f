//! Access and refresh token issuance

use chrono::{Duration, Utc};

use crate::domain::entities::token::{Claims, USER_ID_CLAIM};
use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::codec::TokenCodec;

/// Builds signed tokens for a user
#[derive(Clone)]
pub struct TokenIssuer {
    codec: TokenCodec,
}

impl TokenIssuer {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// Issues a token for `user` valid for `ttl` from now
    ///
    /// The subject is the user's email and the `id` claim carries the
    /// numeric user id.
    ///
    /// # Arguments
    ///
    /// * `user` - The token owner
    /// * `ttl` - Lifetime; `exp = iat + ttl`
    ///
    /// # Returns
    ///
    /// * `Err(TokenError::TokenGenerationFailed)` - `ttl` pushes `exp` out of range
    pub fn issue(&self, user: &User, ttl: Duration) -> Result<String, DomainError> {
        let claims = Claims::new(self.codec.issuer(), user.email.as_str(), Utc::now(), ttl)?
            .with_claim(USER_ID_CLAIM, user.id);

        let token = self.codec.encode(&claims)?;

        tracing::debug!(
            user_id = user.id,
            expires_at = claims.exp,
            "Issued token"
        );

        Ok(token)
    }
}
