//! Business services containing domain logic and use cases.

pub mod auth;
pub mod blog;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, MIN_BCRYPT_COST};
pub use blog::{AddArticle, BlogService, UpdateArticle};
pub use token::{
    Authentication, SigningConfig, TokenCodec, TokenIssuer, TokenRefreshService, TokenValidator,
    ROLE_USER,
};
