//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, TokenError};

#[test]
fn test_token_error_bridges_into_domain_error() {
    let error: DomainError = TokenError::UnknownRefreshToken.into();
    assert!(matches!(error, DomainError::Token(TokenError::UnknownRefreshToken)));
    assert_eq!(error.to_string(), "Unknown refresh token");
}

#[test]
fn test_auth_error_bridges_into_domain_error() {
    let error: DomainError = AuthError::UserNotFound.into();
    assert!(matches!(error, DomainError::Auth(AuthError::UserNotFound)));
}

#[test]
fn test_missing_claim_message_names_claim() {
    let error = TokenError::MissingClaim { claim: "id".to_string() };
    assert_eq!(error.to_string(), "Missing required claim: id");
}

#[test]
fn test_not_found_message() {
    let error = DomainError::not_found(42);
    assert_eq!(error.to_string(), "Resource not found: not found: 42");
}
