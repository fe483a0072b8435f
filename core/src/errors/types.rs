//! Error types for authentication and token handling
//!
//! Messages here are for logs. The presentation layer decides which text
//! and status code a client sees.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailAlreadyExists,
}

/// Token-related errors
///
/// `MalformedToken`, `SignatureInvalid` and `Expired` come only out of
/// `TokenCodec::decode`. `InvalidRefreshToken` and `UnknownRefreshToken` are
/// raised by the refresh exchange.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    MalformedToken,

    #[error("Token signature verification failed")]
    SignatureInvalid,

    #[error("Token expired")]
    Expired,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Unknown refresh token")]
    UnknownRefreshToken,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
