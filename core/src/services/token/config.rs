//! Signing configuration for the token codec

use std::fmt;

use blog_shared::config::JwtConfig;

/// Issuer name and HMAC secret used to sign and verify tokens
#[derive(Clone, PartialEq, Eq)]
pub struct SigningConfig {
    /// Value written to the `iss` claim
    pub issuer: String,
    /// HS256 secret
    pub secret_key: String,
}

impl SigningConfig {
    pub fn new(issuer: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl From<&JwtConfig> for SigningConfig {
    fn from(config: &JwtConfig) -> Self {
        Self::new(config.issuer.clone(), config.secret_key.clone())
    }
}

impl fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningConfig")
            .field("issuer", &self.issuer)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
