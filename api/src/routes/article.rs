//! Article endpoints; every handler runs behind `JwtAuth`

use actix_web::{web, HttpResponse};
use validator::Validate;

use blog_core::repositories::{ArticleRepository, RefreshTokenRepository, UserRepository};

use crate::dto::{AddArticleRequest, ArticleDto, ArticleResponse, UpdateArticleRequest};
use crate::handlers::{handle_domain_error, handle_validation_error};
use crate::middleware::auth::AuthContext;

use super::AppState;

/// POST /api/articles
pub async fn add_article<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    auth: AuthContext,
    request: web::Json<AddArticleRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
    A: ArticleRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_error(errors);
    }

    tracing::debug!(user_id = ?auth.user_id, "Creating article");

    match state.blog_service.save(request.into_inner().into()).await {
        Ok(article) => HttpResponse::Created().json(ArticleDto::from(article)),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/articles
pub async fn find_all_articles<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    _auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
    A: ArticleRepository + 'static,
{
    match state.blog_service.find_all().await {
        Ok(articles) => HttpResponse::Ok().json(
            articles
                .into_iter()
                .map(ArticleResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}

/// GET /api/articles/{id}
pub async fn find_article<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    _auth: AuthContext,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
    A: ArticleRepository + 'static,
{
    match state.blog_service.find_by_id(path.into_inner()).await {
        Ok(article) => HttpResponse::Ok().json(ArticleResponse::from(article)),
        Err(error) => handle_domain_error(error),
    }
}

/// DELETE /api/articles/{id}
pub async fn delete_article<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    auth: AuthContext,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RefreshTokenRepository + 'static,
    A: ArticleRepository + 'static,
{
    let id = path.into_inner();
    tracing::debug!(user_id = ?auth.user_id, article_id = id, "Deleting article");

    match state.blog_service.delete(id).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(error) => handle_domain_error(error),
    }
}

/// PUT /api/articles/{id}
pub async fn update_article<U, R, A>(
    state: web::Data<AppState<U, R, A>>,
    _auth: AuthContext,
    path: web::Path<i64>,
    request: web::Json<UpdateArticleRequest>,
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
        .blog_service
        .update(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(article) => HttpResponse::Ok().json(ArticleDto::from(article)),
        Err(error) => handle_domain_error(error),
    }
}
