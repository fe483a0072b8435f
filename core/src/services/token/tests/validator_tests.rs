//! Unit tests for token validation

use chrono::{Duration, Utc};

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenIssuer, TokenValidator, ROLE_USER};

use super::{test_codec, TEST_ISSUER};

fn validator() -> TokenValidator {
    TokenValidator::new(test_codec())
}

fn fresh_token() -> String {
    TokenIssuer::new(test_codec())
        .issue(&User::new(3, "three@example.com", "hash"), Duration::hours(2))
        .unwrap()
}

#[test]
fn test_fresh_token_is_valid() {
    assert!(validator().is_valid(&fresh_token()));
}

#[test]
fn test_token_expired_a_week_ago_is_invalid() {
    let claims = Claims::new(
        TEST_ISSUER,
        "user@example.com",
        Utc::now() - Duration::days(21),
        Duration::days(14),
    ).unwrap();
    let token = test_codec().encode(&claims).unwrap();

    assert!(!validator().is_valid(&token));
}

#[test]
fn test_garbage_is_invalid() {
    assert!(!validator().is_valid("garbage"));
}

#[test]
fn test_get_user_id() {
    assert_eq!(validator().get_user_id(&fresh_token()).unwrap(), 3);
}

#[test]
fn test_get_user_id_without_claim() {
    let claims = Claims::new(TEST_ISSUER, "user@example.com", Utc::now(), Duration::hours(1)).unwrap();
    let token = test_codec().encode(&claims).unwrap();

    let result = validator().get_user_id(&token);
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::MissingClaim { ref claim })) if claim == "id"
    ));
}

#[test]
fn test_get_user_id_with_non_integer_claim() {
    let claims = Claims::new(TEST_ISSUER, "user@example.com", Utc::now(), Duration::hours(1)).unwrap()
        .with_claim("id", "one");
    let token = test_codec().encode(&claims).unwrap();

    assert!(matches!(
        validator().get_user_id(&token),
        Err(DomainError::Token(TokenError::MissingClaim { .. }))
    ));
}

#[test]
fn test_get_subject_claims_propagates_decode_error() {
    assert!(matches!(
        validator().get_subject_claims("a.b"),
        Err(DomainError::Token(TokenError::MalformedToken))
    ));
}

#[test]
fn test_get_authentication() {
    let auth = validator().get_authentication(&fresh_token()).unwrap();

    assert_eq!(auth.subject, "three@example.com");
    assert_eq!(auth.user_id, Some(3));
    assert!(auth.has_authority(ROLE_USER));
    assert_eq!(auth.authorities.len(), 1);
}

#[test]
fn test_token_becomes_invalid_once_ttl_elapses() {
    let token = TokenIssuer::new(test_codec())
        .issue(&User::new(4, "four@example.com", "hash"), Duration::seconds(1))
        .unwrap();
    assert!(validator().is_valid(&token));

    // exp has one-second resolution; wait until now > exp for sure
    std::thread::sleep(std::time::Duration::from_millis(2_100));

    assert!(!validator().is_valid(&token));
    assert!(matches!(
        validator().get_subject_claims(&token),
        Err(DomainError::Token(TokenError::Expired))
    ));
}
