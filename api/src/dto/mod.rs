//! Request and response bodies. Field names are camelCase on the wire.

pub mod article;
pub mod token;
pub mod user;

pub use article::{AddArticleRequest, ArticleDto, ArticleResponse, UpdateArticleRequest};
pub use token::{CreateAccessTokenRequest, CreateAccessTokenResponse};
pub use user::{AddUserRequest, AddUserResponse, LoginRequest, LoginResponse};
