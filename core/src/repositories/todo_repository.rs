//! Todo repository trait defining the interface for todo persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::todo::Todo;
use crate::errors::DomainError;

/// Repository trait for Todo entity persistence operations
///
/// Every read and write is scoped to an owning user id. Existence and
/// ownership are checked as a single predicate: a todo owned by a
/// different user yields `Ok(None)` exactly like a missing one, so
/// callers cannot distinguish the two cases.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos owned by `user_id`, in storage order.
    /// An empty result is `Ok(vec![])`, never an error.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Todo>, DomainError>;

    /// Persist a new todo
    async fn create(&self, todo: Todo) -> Result<Todo, DomainError>;

    /// Set the title of the todo with `todo_id` owned by `user_id`
    ///
    /// # Returns
    /// * `Ok(Some(Todo))` - The updated record; only `title` changed
    /// * `Ok(None)` - No such todo owned by this user
    async fn update_title(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        title: &str,
    ) -> Result<Option<Todo>, DomainError>;

    /// Remove the todo with `todo_id` owned by `user_id`
    ///
    /// # Returns
    /// * `Ok(Some(Todo))` - The record as it existed before deletion
    /// * `Ok(None)` - No such todo owned by this user
    async fn delete(&self, user_id: Uuid, todo_id: Uuid) -> Result<Option<Todo>, DomainError>;
}
