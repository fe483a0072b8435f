//! Shared utilities and common types for the blog server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loading
//! - The API error response structure

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
