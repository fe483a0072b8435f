//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User, UserId};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - User not found
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by email
    ///
    /// # Arguments
    /// * `email` - Exact email, as used for the token subject
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - User not found
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user and assign its id
    ///
    /// # Returns
    /// * `Ok(User)` - Created user
    /// * `Err(DomainError::Auth(AuthError::EmailAlreadyExists))` - Email taken
    /// * `Err(DomainError)` - Database error occurred
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;
}
