//! Route handlers and shared application state

pub mod article;
pub mod health;
pub mod token;
pub mod user;

use std::sync::Arc;

use blog_core::repositories::{ArticleRepository, RefreshTokenRepository, UserRepository};
use blog_core::services::{
    AuthService, AuthServiceConfig, BlogService, TokenCodec, TokenRefreshService, TokenValidator,
};

/// Application state shared by all handlers
pub struct AppState<U, R, A>
where
    U: UserRepository,
    R: RefreshTokenRepository,
    A: ArticleRepository,
{
    pub auth_service: Arc<AuthService<U, R>>,
    pub refresh_service: Arc<TokenRefreshService<R, U>>,
    pub blog_service: Arc<BlogService<A>>,
    pub token_validator: TokenValidator,
}

impl<U, R, A> AppState<U, R, A>
where
    U: UserRepository,
    R: RefreshTokenRepository,
    A: ArticleRepository,
{
    /// Wire every service from the three repositories and one codec
    pub fn new(
        users: Arc<U>,
        refresh_tokens: Arc<R>,
        articles: Arc<A>,
        codec: TokenCodec,
        auth_config: AuthServiceConfig,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                users.clone(),
                refresh_tokens.clone(),
                codec.clone(),
                auth_config,
            )),
            refresh_service: Arc::new(TokenRefreshService::new(refresh_tokens, users, codec.clone())),
            blog_service: Arc::new(BlogService::new(articles)),
            token_validator: TokenValidator::new(codec),
        }
    }
}
