//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT signing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//!
//! Settings are layered with the `config` crate: serde defaults, then the
//! optional `config/<environment>.toml` file, then `BLOG_*` environment
//! variables (`BLOG_JWT__SECRET_KEY` maps to `jwt.secret_key`).

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "BLOG";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// JWT signing configuration; required, there is no usable default
    pub jwt: JwtConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the config file for the current environment
    /// and `BLOG_*` environment variables.
    ///
    /// A missing or empty `jwt.issuer` / `jwt.secret_key` is an error; the
    /// caller is expected to abort startup.
    pub fn load() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let logging = LoggingConfig::for_environment(environment);
        let settings = Config::builder()
            .set_default("environment", environment.as_str())?
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", logging.format.as_str())?
            .add_source(File::with_name(&environment.config_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_settings(settings)
    }

    /// Deserialize and validate an already-built settings tree
    pub fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let config: AppConfig = settings.try_deserialize()?;
        config.jwt.validate()?;
        Ok(config)
    }
}
