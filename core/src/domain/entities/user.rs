//! User entity representing a registered account.

use serde::{Deserialize, Serialize};

/// Numeric user identifier, assigned by the store and never changed
pub type UserId = i64;

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: UserId,

    /// Unique email, used as the token subject
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    pub fn new(id: UserId, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            password: password.into(),
        }
    }
}

/// A user that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    /// Already hashed
    pub password: String,
}
