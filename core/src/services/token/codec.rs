//! Compact JWT encoding and verification

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

use super::config::SigningConfig;

/// HS256 encoder/decoder bound to one signing configuration
///
/// Cheap to clone; holds no mutable state.
#[derive(Clone)]
pub struct TokenCodec {
    config: SigningConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a codec for the given signing configuration
    pub fn new(config: SigningConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_aud = false;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issuer name written by this codec
    pub fn issuer(&self) -> &str {
        &self.config.issuer
    }

    /// Signs `claims` into `header.payload.signature`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact token
    /// * `Err(TokenError::TokenGenerationFailed)` - Claims could not be serialized
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed)
    }

    /// Verifies the signature and expiry of `token` and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - All claims, custom ones included
    /// * `Err(TokenError::SignatureInvalid)` - HMAC mismatch
    /// * `Err(TokenError::Expired)` - `exp` is before now
    /// * `Err(TokenError::MalformedToken)` - Anything else that fails to parse
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::MalformedToken,
            })
    }
}
