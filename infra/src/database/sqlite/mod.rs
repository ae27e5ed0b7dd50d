//! SQLite implementations of the core repository traits.

mod todo_repository_impl;
mod user_repository_impl;

pub use todo_repository_impl::SqliteTodoRepository;
pub use user_repository_impl::SqliteUserRepository;

use td_core::DomainError;

/// Maps a low-level sqlx failure into the domain error space
pub(crate) fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Database(e.to_string())
}
