//! Database connection management and repository implementations.

pub mod connection;
pub mod sqlite;


pub use connection::DatabasePool;
pub use sqlite::{SqliteTodoRepository, SqliteUserRepository};
