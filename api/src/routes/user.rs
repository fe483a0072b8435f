use actix_web::{web, HttpResponse};
use validator::Validate;

use blog_core::repositories::{ArticleRepository, RefreshTokenRepository, UserRepository};

use crate::dto::{AddUserRequest, AddUserResponse, LoginRequest, LoginResponse};
use crate::handlers::{handle_domain_error, handle_validation_error};

use super::AppState;

/// Handler for POST /user
///
/// Registers a user and returns `201 {"id": ...}`. A taken email is a 409.
pub async fn signup<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    request: web::Json<AddUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
    A: ArticleRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state.auth_service.signup(&request.email, &request.password).await {
        Ok(id) => HttpResponse::Created().json(AddUserResponse { id }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/login
///
/// Returns `{"accessToken": ..., "refreshToken": ...}`. Bad credentials are a 401.
pub async fn login<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
    A: ArticleRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    match state.auth_service.login(&request.email, &request.password).await {
        Ok(pair) => HttpResponse::Ok().json(LoginResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
