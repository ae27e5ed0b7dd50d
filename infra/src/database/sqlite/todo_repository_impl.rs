//! SQLite-backed todo repository

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use td_core::domain::entities::todo::Todo;
use td_core::errors::DomainError;
use td_core::repositories::TodoRepository;

use crate::database::DatabasePool;

use super::db_err;

/// Stores todos in SQLite.
///
/// Updates and deletes filter on both the todo id and the owner id in
/// one statement. A todo owned by someone else therefore looks exactly
/// like a todo that does not exist.
pub struct SqliteTodoRepository {
    db: DatabasePool,
}

impl SqliteTodoRepository {
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

fn row_to_todo(row: &SqliteRow) -> Result<Todo, DomainError> {
    let id: String = row.try_get("id").map_err(db_err)?;
    let user_id: String = row.try_get("user_id").map_err(db_err)?;
    let title: String = row.try_get("title").map_err(db_err)?;
    let completed: bool = row.try_get("completed").map_err(db_err)?;

    Ok(Todo {
        id: Uuid::parse_str(&id)
            .map_err(|e| DomainError::Database(format!("corrupt todo id: {}", e)))?,
        user_id: Uuid::parse_str(&user_id)
            .map_err(|e| DomainError::Database(format!("corrupt todo owner id: {}", e)))?,
        title,
        completed,
    })
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Todo>, DomainError> {
        // rowid order matches insertion order
        let rows = sqlx::query(
            "SELECT id, user_id, title, completed FROM todos WHERE user_id = ? ORDER BY rowid",
        )
        .bind(user_id.to_string())
        .fetch_all(self.db.pool())
        .await
        .map_err(db_err)?;

        rows.iter().map(row_to_todo).collect()
    }

    async fn create(&self, todo: Todo) -> Result<Todo, DomainError> {
        sqlx::query("INSERT INTO todos (id, user_id, title, completed) VALUES (?, ?, ?, ?)")
            .bind(todo.id.to_string())
            .bind(todo.user_id.to_string())
            .bind(&todo.title)
            .bind(todo.completed)
            .execute(self.db.pool())
            .await
            .map_err(db_err)?;

        Ok(todo)
    }

    async fn update_title(
        &self,
        user_id: Uuid,
        todo_id: Uuid,
        title: &str,
    ) -> Result<Option<Todo>, DomainError> {
        let row = sqlx::query(
            "UPDATE todos SET title = ? WHERE id = ? AND user_id = ? \
             RETURNING id, user_id, title, completed",
        )
        .bind(title)
        .bind(todo_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(self.db.pool())
        .await
        .map_err(db_err)?;

        row.as_ref().map(row_to_todo).transpose()
    }

    async fn delete(&self, user_id: Uuid, todo_id: Uuid) -> Result<Option<Todo>, DomainError> {
        let row = sqlx::query(
            "DELETE FROM todos WHERE id = ? AND user_id = ? \
             RETURNING id, user_id, title, completed",
        )
        .bind(todo_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(self.db.pool())
        .await
        .map_err(db_err)?;

        row.as_ref().map(row_to_todo).transpose()
    }
}
