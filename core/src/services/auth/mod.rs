//! Authentication service module
//!
//! Email/password signup and login. Login hands out an access token and a
//! refresh token, and records the refresh token for the exchange endpoint.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::{AuthServiceConfig, MIN_BCRYPT_COST};
pub use service::AuthService;
