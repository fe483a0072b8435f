//! MySQL repository implementations

mod article_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use article_repository_impl::MySqlArticleRepository;
pub use token_repository_impl::MySqlRefreshTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use sqlx::mysql::MySqlRow;
use sqlx::Row;

use crate::InfrastructureError;

/// Read a column, naming it in the error
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, InfrastructureError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(name)
        .map_err(|e| InfrastructureError::Mapping(format!("Failed to get {}: {}", name, e)))
}
