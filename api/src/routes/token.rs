use actix_web::{web, HttpResponse};
use validator::Validate;

use blog_core::repositories::{ArticleRepository, RefreshTokenRepository, UserRepository};

use crate::dto::{CreateAccessTokenRequest, CreateAccessTokenResponse};
use crate::handlers::{handle_domain_error, handle_validation_error};

use super::AppState;

/// Handler for POST /api/token
///
/// Exchanges a refresh token for a new access token.
///
/// # Request Body
///
/// ```json
/// { "refreshToken": "eyJ..." }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "accessToken": "eyJ..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid, expired or unknown refresh token, or its owner no longer exists
pub async fn create_new_access_token<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    request: web::Json<CreateAccessTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
    A: ArticleRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state
        .refresh_service
        .create_new_access_token(&request.refresh_token)
        .await
    {
        Ok(access_token) => {
            HttpResponse::Created().json(CreateAccessTokenResponse { access_token })
        }
        Err(error) => handle_domain_error(error),
    }
}
