//! SQLite-backed user repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use td_core::domain::entities::user::User;
use td_core::errors::DomainError;
use td_core::repositories::UserRepository;

use crate::database::DatabasePool;

use super::db_err;

/// Stores users in SQLite.
///
/// Identifiers and timestamps are persisted as TEXT and parsed back on
/// read, so a row that fails to parse surfaces as a database error
/// rather than a panic.
pub struct SqliteUserRepository {
    db: DatabasePool,
}

impl SqliteUserRepository {
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

fn row_to_user(row: &SqliteRow) -> Result<User, DomainError> {
    let id: String = row.try_get("id").map_err(db_err)?;
    let username: String = row.try_get("username").map_err(db_err)?;
    let password_hash: String = row.try_get("password_hash").map_err(db_err)?;
    let created_at: String = row.try_get("created_at").map_err(db_err)?;

    Ok(User {
        id: Uuid::parse_str(&id)
            .map_err(|e| DomainError::Database(format!("corrupt user id: {}", e)))?,
        username,
        password_hash,
        created_at: DateTime::parse_from_rfc3339(&created_at)
            .map_err(|e| DomainError::Database(format!("corrupt user timestamp: {}", e)))?
            .with_timezone(&Utc),
    })
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            "SELECT id, username, password_hash, created_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(self.db.pool())
        .await
        .map_err(db_err)?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let row =
            sqlx::query("SELECT id, username, password_hash, created_at FROM users WHERE id = ?")
                .bind(id.to_string())
                .fetch_optional(self.db.pool())
                .await
                .map_err(db_err)?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let result = sqlx::query(
            "INSERT INTO users (id, username, password_hash, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.created_at.to_rfc3339())
        .execute(self.db.pool())
        .await;

        match result {
            Ok(_) => Ok(user),
            // The UNIQUE constraint on username backstops concurrent
            // registrations that both passed the existence check
            Err(e) => match e.as_database_error() {
                Some(db) if db.is_unique_violation() => Err(DomainError::Conflict {
                    resource: "User".to_string(),
                }),
                _ => Err(db_err(e)),
            },
        }
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT 1 FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(self.db.pool())
            .await
            .map_err(db_err)?;

        Ok(row.is_some())
    }
}
