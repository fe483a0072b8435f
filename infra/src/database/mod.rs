//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Repository implementations for users, refresh tokens and articles

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlArticleRepository, MySqlRefreshTokenRepository, MySqlUserRepository};
