//! Todo service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::todo::Todo;
use crate::errors::DomainError;
use crate::repositories::TodoRepository;

/// Per-user todo operations.
///
/// Every operation takes the authenticated caller's id and never
/// touches another user's rows. Ownership and existence are a single
/// predicate at the storage layer, so a todo belonging to someone else
/// is indistinguishable from one that does not exist.
pub struct TodoService<T: TodoRepository> {
    todos: Arc<T>,
}

impl<T: TodoRepository> TodoService<T> {
    /// Creates a new todo service over the given store
    pub fn new(todos: Arc<T>) -> Self {
        Self { todos }
    }

    /// Lists the caller's todos in storage order
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Todo>, DomainError> {
        self.todos.list_by_user(user_id).await
    }

    /// Creates a new incomplete todo for the caller
    pub async fn create(&self, user_id: Uuid, title: &str) -> Result<Todo, DomainError> {
        let todo = self
            .todos
            .create(Todo::new(user_id, title.to_string()))
            .await?;

        tracing::debug!(user_id = %user_id, todo_id = %todo.id, "created todo");

        Ok(todo)
    }

    /// Renames one of the caller's todos, leaving its completed flag alone
    ///
    /// # Errors
    /// * `DomainError::NotFound` - No such todo owned by this caller
    pub async fn update_title(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        title: &str,
    ) -> Result<Todo, DomainError> {
        self.todos
            .update_title(user_id, todo_id, title)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Todo".to_string(),
            })
    }

    /// Deletes one of the caller's todos, returning its final state
    ///
    /// # Errors
    /// * `DomainError::NotFound` - No such todo owned by this caller
    pub async fn delete(&self, user_id: Uuid, todo_id: Uuid) -> Result<Todo, DomainError> {
        self.todos
            .delete(user_id, todo_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Todo".to_string(),
            })
    }
}
