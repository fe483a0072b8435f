//! `[server]` section

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings handed to `actix_web::HttpServer`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Worker count; 0 keeps actix's default of one per physical core
    pub workers: usize,

    /// Keep-alive for idle client connections, in seconds
    pub keep_alive_secs: u64,

    /// Grace period for in-flight requests on shutdown, in seconds
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: 0,
            keep_alive_secs: 5,
            shutdown_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// `host:port` for `HttpServer::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 9090,
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
        assert_eq!(config.keep_alive(), Duration::from_secs(5));
    }
}
