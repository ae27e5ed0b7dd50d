//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user.
///
/// The password is only ever held as a salted bcrypt hash, and user
/// records never cross the HTTP boundary. Within this system a user is
/// created on registration and neither updated nor deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login name, unique and immutable after registration
    pub username: String,

    /// Salted bcrypt hash of the password
    pub password_hash: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User with a generated identifier
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}
