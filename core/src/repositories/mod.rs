pub mod article;
pub mod token;
pub mod user;

pub use article::{ArticleRepository, MockArticleRepository};
pub use token::{MockRefreshTokenRepository, RefreshTokenRepository};
pub use user::{MockUserRepository, UserRepository};
