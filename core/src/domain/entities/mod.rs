//! Domain entities representing core business objects.

pub mod article;
pub mod token;
pub mod user;


// Re-export commonly used types
pub use article::{Article, NewArticle};
pub use token::{
    access_token_duration, refresh_token_duration, Claims, RefreshToken, TokenPair,
    ACCESS_TOKEN_EXPIRY_HOURS, REFRESH_TOKEN_EXPIRY_DAYS, USER_ID_CLAIM,
};
pub use user::{NewUser, User, UserId};
