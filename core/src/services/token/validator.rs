//! Token validation and principal extraction

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::{Claims, USER_ID_CLAIM};
use crate::domain::entities::user::UserId;
use crate::errors::{DomainError, TokenError};

use super::codec::TokenCodec;

/// Authority granted to every authenticated user
pub const ROLE_USER: &str = "ROLE_USER";

/// Principal built from a verified access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authentication {
    /// Token subject (user email)
    pub subject: String,
    /// Value of the `id` claim when present
    pub user_id: Option<UserId>,
    pub authorities: Vec<String>,
}

impl Authentication {
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}

/// Checks presented tokens
#[derive(Clone)]
pub struct TokenValidator {
    codec: TokenCodec,
}

impl TokenValidator {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }

    /// True iff the token decodes with a good signature and has not expired
    pub fn is_valid(&self, token: &str) -> bool {
        self.codec.decode(token).is_ok()
    }

    /// Returns the decoded claims
    pub fn get_subject_claims(&self, token: &str) -> Result<Claims, DomainError> {
        Ok(self.codec.decode(token)?)
    }

    /// Returns the numeric `id` claim
    ///
    /// # Returns
    ///
    /// * `Err(TokenError::MissingClaim)` - The claim is absent or not an integer
    pub fn get_user_id(&self, token: &str) -> Result<UserId, DomainError> {
        let claims = self.get_subject_claims(token)?;
        claims.user_id().ok_or_else(|| {
            TokenError::MissingClaim {
                claim: USER_ID_CLAIM.to_string(),
            }
            .into()
        })
    }

    /// Builds the request principal for a bearer token
    pub fn get_authentication(&self, token: &str) -> Result<Authentication, DomainError> {
        let claims = self.get_subject_claims(token)?;
        Ok(Authentication {
            user_id: claims.user_id(),
            subject: claims.sub,
            authorities: vec![ROLE_USER.to_string()],
        })
    }
}
