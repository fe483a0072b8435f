use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use blog_api::app::create_app;
use blog_api::routes::AppState;
use blog_core::services::{AuthServiceConfig, SigningConfig, TokenCodec};
use blog_infra::database::{
    DatabasePool, MySqlArticleRepository, MySqlRefreshTokenRepository, MySqlUserRepository,
};
use blog_shared::config::{AppConfig, LogFormat, LoggingConfig};

/// Install the global subscriber; `RUST_LOG` overrides `logging.level`
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!(environment = %config.environment, "Starting blog API server");

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    tracing::info!(pool = %pool.get_statistics(), "Database pool ready");

    let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let refresh_tokens = Arc::new(MySqlRefreshTokenRepository::new(pool.get_pool().clone()));
    let articles = Arc::new(MySqlArticleRepository::new(pool.get_pool().clone()));
    let codec = TokenCodec::new(SigningConfig::from(&config.jwt));

    let state = web::Data::new(AppState::new(
        users,
        refresh_tokens,
        articles,
        codec,
        AuthServiceConfig::default(),
    ));

    let environment = config.environment;
    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Binding HTTP server");

    let mut server = HttpServer::new(move || create_app(state.clone(), environment))
        .keep_alive(config.server.keep_alive())
        .shutdown_timeout(config.server.shutdown_timeout_secs);
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    Ok(())
}
