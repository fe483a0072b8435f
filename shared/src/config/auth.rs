//! JWT signing configuration

use config::ConfigError;
use serde::{Deserialize, Serialize};

/// JWT signing configuration
///
/// Both fields are required. They are read once at startup and never
/// mutated afterwards.
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT issuer claim (`iss`)
    pub issuer: String,

    /// Shared secret for HS256 signing
    pub secret_key: String,
}

impl JwtConfig {
    /// Create a new JWT configuration
    pub fn new(issuer: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Reject a blank issuer or secret key
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.issuer.trim().is_empty() {
            return Err(ConfigError::Message("jwt.issuer must not be empty".to_string()));
        }
        if self.secret_key.is_empty() {
            return Err(ConfigError::Message("jwt.secret_key must not be empty".to_string()));
        }
        Ok(())
    }
}

// The secret must never end up in logs.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("issuer", &self.issuer)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
