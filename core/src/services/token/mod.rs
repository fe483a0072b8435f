//! Token service module for JWT management
//!
//! - `TokenCodec` signs and verifies compact HS256 tokens
//! - `TokenIssuer` builds tokens for a user with a caller-chosen lifetime
//! - `TokenValidator` checks presented tokens and extracts the principal
//! - `TokenRefreshService` exchanges a stored refresh token for an access token

mod codec;
mod config;
mod issuer;
mod refresh;
mod validator;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::SigningConfig;
pub use issuer::TokenIssuer;
pub use refresh::TokenRefreshService;
pub use validator::{Authentication, TokenValidator, ROLE_USER};
