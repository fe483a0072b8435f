//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::user::UserId;
use crate::errors::TokenError;

/// Access token lifetime handed out by login and by the refresh exchange
pub const ACCESS_TOKEN_EXPIRY_HOURS: i64 = 2;

/// Refresh token lifetime handed out by login
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 14;

/// Name of the custom claim carrying the numeric user id
pub const USER_ID_CLAIM: &str = "id";

/// Lifetime of an access token
pub fn access_token_duration() -> Duration {
    Duration::hours(ACCESS_TOKEN_EXPIRY_HOURS)
}

/// Lifetime of a refresh token
pub fn refresh_token_duration() -> Duration {
    Duration::days(REFRESH_TOKEN_EXPIRY_DAYS)
}

/// Registered claim names; these live in typed fields, never in `custom`
pub const REGISTERED_CLAIMS: [&str; 4] = ["iss", "iat", "exp", "sub"];

/// Claims structure for JWT payload
///
/// Registered claims are typed fields; everything else lands in `custom`
/// and survives a decode untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Subject (user email)
    pub sub: String,

    /// Custom claims such as `id`
    #[serde(flatten)]
    custom: Map<String, Value>,
}

impl Claims {
    /// Creates claims valid from `issued_at` for `ttl`
    ///
    /// # Arguments
    ///
    /// * `issuer` - Value of the `iss` claim
    /// * `subject` - Value of the `sub` claim
    /// * `issued_at` - Instant used for `iat`
    /// * `ttl` - Lifetime; `exp = iat + ttl`
    ///
    /// # Returns
    ///
    /// * `Err(TokenError::TokenGenerationFailed)` - `iat + ttl` is not a representable instant
    pub fn new(
        issuer: impl Into<String>,
        subject: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, TokenError> {
        let expires_at = issued_at
            .checked_add_signed(ttl)
            .ok_or(TokenError::TokenGenerationFailed)?;

        Ok(Self {
            iss: issuer.into(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            sub: subject.into(),
            custom: Map::new(),
        })
    }

    /// Adds a custom claim, replacing any previous value under `key`
    ///
    /// Registered names (`iss`, `iat`, `exp`, `sub`) are ignored; a second
    /// copy of those would make the encoded payload undecodable.
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !REGISTERED_CLAIMS.contains(&key.as_str()) {
            self.custom.insert(key, value.into());
        }
        self
    }

    /// Looks up a custom claim
    pub fn claim(&self, key: &str) -> Option<&Value> {
        self.custom.get(key)
    }

    /// Gets the user ID from the `id` custom claim
    ///
    /// # Returns
    ///
    /// `None` if the claim is absent or not an integer
    pub fn user_id(&self) -> Option<UserId> {
        self.claim(USER_ID_CLAIM).and_then(Value::as_i64)
    }
}

/// Refresh token record stored in the database
///
/// There is at most one record per user; issuing a new refresh token
/// overwrites the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Row identifier; 0 until the record is stored
    pub id: i64,

    /// User ID this token belongs to
    pub user_id: UserId,

    /// The refresh token string exactly as handed to the client
    pub refresh_token: String,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new, not yet persisted, refresh token record
    pub fn new(user_id: UserId, refresh_token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            user_id,
            refresh_token: refresh_token.into(),
            expires_at,
        }
    }

    /// Replaces the stored token value and expiry
    pub fn update(&mut self, refresh_token: impl Into<String>, expires_at: DateTime<Utc>) -> &mut Self {
        self.refresh_token = refresh_token.into();
        self.expires_at = expires_at;
        self
    }
}

/// Token pair returned to the client after login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
