//! Configuration for the authentication service

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt work factor used when hashing new passwords
    pub bcrypt_cost: u32,
}

impl AuthServiceConfig {
    /// Costs below [`MIN_BCRYPT_COST`] are raised to it
    pub fn new(bcrypt_cost: u32) -> Self {
        Self {
            bcrypt_cost: bcrypt_cost.max(MIN_BCRYPT_COST),
        }
    }
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
