//! Mock repository implementations for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::todo::Todo;
use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::todo_repository::TodoRepository;
use super::user_repository::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Remove a user, simulating an account deleted out of band
    pub async fn remove(&self, id: Uuid) {
        self.users.write().await.remove(&id);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        // Duplicate usernames are refused like a unique constraint would
        if users.values().any(|u| u.username == user.username) {
            return Err(DomainError::Conflict {
                resource: "User".to_string(),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.username == username))
    }
}

/// Mock todo repository for testing
///
/// Backed by a `Vec` so list order matches insertion order, like the
/// rowid ordering of the real store.
pub struct MockTodoRepository {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl MockTodoRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            todos: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Total number of stored todos across all users
    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    /// Flip the completed flag directly, bypassing the repository API
    pub async fn set_completed(&self, todo_id: Uuid, completed: bool) {
        let mut todos = self.todos.write().await;
        if let Some(todo) = todos.iter_mut().find(|t| t.id == todo_id) {
            todo.completed = completed;
        }
    }
}

impl Default for MockTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Todo>, DomainError> {
        let todos = self.todos.read().await;
        Ok(todos
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, todo: Todo) -> Result<Todo, DomainError> {
        let mut todos = self.todos.write().await;
        todos.push(todo.clone());
        Ok(todo)
    }

    async fn update_title(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        title: &str,
    ) -> Result<Option<Todo>, DomainError> {
        let mut todos = self.todos.write().await;
        match todos
            .iter_mut()
            .find(|t| t.id == todo_id && t.user_id == user_id)
        {
            Some(todo) => {
                todo.title = title.to_string();
                Ok(Some(todo.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, user_id: Uuid, todo_id: Uuid) -> Result<Option<Todo>, DomainError> {
        let mut todos = self.todos.write().await;
        match todos
            .iter()
            .position(|t| t.id == todo_id && t.user_id == user_id)
        {
            Some(index) => Ok(Some(todos.remove(index))),
            None => Ok(None),
        }
    }
}
