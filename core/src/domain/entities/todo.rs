//! Todo entity owned by a single user.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title of the todo seeded for every new account
pub const WELCOME_TODO_TITLE: &str = "Welcome to the todo app";

/// A todo item.
///
/// Every todo belongs to exactly one user and is visible and mutable
/// only through that user's identifier. Serialized to clients as
/// camelCase JSON: `{"id", "userId", "title", "completed"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier for the todo
    pub id: Uuid,

    /// Owning user, immutable for the lifetime of the record
    pub user_id: Uuid,

    /// Title text, the only field mutable after creation
    pub title: String,

    /// Completion flag; present in the schema but settable by no
    /// exposed operation
    pub completed: bool,
}

impl Todo {
    /// Creates a new, uncompleted Todo with a generated identifier
    pub fn new(user_id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            completed: false,
        }
    }

    /// The default todo created on registration
    pub fn welcome(user_id: Uuid) -> Self {
        Self::new(user_id, WELCOME_TODO_TITLE)
    }
}
