//! Application factory
//!
//! Builds the actix-web `App` with tracing, CORS, JSON error handling and
//! every route. Used by the binary and by the integration tests.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    http::StatusCode,
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use blog_core::repositories::{ArticleRepository, RefreshTokenRepository, UserRepository};
use blog_shared::config::Environment;
use blog_shared::errors::error_codes;

use crate::handlers::error::error_response;
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{article, health, token, user, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, R, A>(
    app_state: web::Data<AppState<U, R, A>>,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
    A: ArticleRepository + 'static,
{
    let jwt_auth = JwtAuth::new(app_state.token_validator.clone());

    App::new()
        .app_data(app_state)
        .app_data(json_config())
        .wrap(create_cors(environment))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health_check))
        .route("/user", web::post().to(user::signup::<U, R, A>))
        .route("/api/login", web::post().to(user::login::<U, R, A>))
        .route(
            "/api/token",
            web::post().to(token::create_new_access_token::<U, R, A>),
        )
        .service(
            web::scope("/api/articles")
                .wrap(jwt_auth)
                .route("", web::post().to(article::add_article::<U, R, A>))
                .route("", web::get().to(article::find_all_articles::<U, R, A>))
                .route("/{id}", web::get().to(article::find_article::<U, R, A>))
                .route("/{id}", web::put().to(article::update_article::<U, R, A>))
                .route("/{id}", web::delete().to(article::delete_article::<U, R, A>)),
        )
        .default_service(web::route().to(not_found))
}

/// Malformed JSON bodies get the standard error body
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = error_response(StatusCode::BAD_REQUEST, error_codes::BAD_REQUEST, err.to_string());
        InternalError::from_response(err, response).into()
    })
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    error_response(
        StatusCode::NOT_FOUND,
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    )
}
