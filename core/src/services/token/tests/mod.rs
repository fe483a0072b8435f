//! Tests for token services

use super::{SigningConfig, TokenCodec};

mod validator_tests;

pub(super) const TEST_ISSUER: &str = "blog-test";

pub(super) fn test_codec() -> TokenCodec {
    TokenCodec::new(SigningConfig::new(TEST_ISSUER, "test-secret-key"))
}
