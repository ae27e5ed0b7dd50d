//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping
/// the boundary between domain and infrastructure layers. Users are
/// write-once in this system: there are no update or delete methods.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique username
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that name
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Conflict)` - The username is already taken
    ///   (the storage unique constraint is the backstop for concurrent
    ///   registrations)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Check whether a username is already registered
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;
}
