//! # Infrastructure Layer
//!
//! Concrete persistence for the blog backend.
//!
//! - **Database**: MySQL connection pool and repository implementations using SQLx
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use blog_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A row could not be mapped onto a domain entity
    #[error("Row mapping error: {0}")]
    Mapping(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        tracing::error!(error = %error, "Infrastructure failure");
        DomainError::Internal {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infrastructure_error_becomes_internal() {
        let error: DomainError = InfrastructureError::Config("bad url".to_string()).into();
        match error {
            DomainError::Internal { message } => assert!(message.contains("bad url")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_sqlx_error_converts() {
        let error: InfrastructureError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, InfrastructureError::Database(_)));
    }
}
