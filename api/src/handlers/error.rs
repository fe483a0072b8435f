//! Mapping from domain errors to HTTP responses

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use validator::ValidationErrors;

use blog_core::errors::{AuthError, DomainError, TokenError};
use blog_shared::errors::{error_codes, ErrorResponse};

/// Build an `ErrorResponse` body with the given status
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Refresh exchange failures (every `TokenError` plus a missing token
/// owner) are client errors and map to 400.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            error_response(StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, message)
        }
        DomainError::NotFound { resource } => {
            error_response(StatusCode::NOT_FOUND, error_codes::NOT_FOUND, resource)
        }
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => error_response(
                StatusCode::UNAUTHORIZED,
                error_codes::UNAUTHORIZED,
                auth_error.to_string(),
            ),
            AuthError::EmailAlreadyExists => error_response(
                StatusCode::CONFLICT,
                error_codes::CONFLICT,
                auth_error.to_string(),
            ),
            AuthError::UserNotFound => error_response(
                StatusCode::BAD_REQUEST,
                error_codes::BAD_REQUEST,
                auth_error.to_string(),
            ),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::TokenGenerationFailed => {
                tracing::error!(error = %token_error, "Token generation failed");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_codes::INTERNAL_ERROR,
                    "An internal error occurred",
                )
            }
            _ => error_response(
                StatusCode::BAD_REQUEST,
                error_codes::TOKEN_INVALID,
                token_error.to_string(),
            ),
        },
        DomainError::Internal { message } => {
            tracing::error!(error = %message, "Internal error");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                "An internal error occurred",
            )
        }
    }
}

/// 400 with the failing field names listed under `details.fields`
pub fn handle_validation_error(errors: ValidationErrors) -> HttpResponse {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed")
            .add_detail("fields", fields),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: DomainError) -> StatusCode {
        handle_domain_error(error).status()
    }

    #[test]
    fn test_refresh_failures_are_bad_requests() {
        assert_eq!(status_of(TokenError::InvalidRefreshToken.into()), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(TokenError::UnknownRefreshToken.into()), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(AuthError::UserNotFound.into()), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_of(DomainError::not_found(1)), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(DomainError::Validation { message: "bad".to_string() }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(AuthError::InvalidCredentials.into()), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AuthError::EmailAlreadyExists.into()), StatusCode::CONFLICT);
        assert_eq!(
            status_of(DomainError::Internal { message: "db down".to_string() }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(TokenError::TokenGenerationFailed.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
