//! Infrastructure layer for the todo service.
//!
//! Provides the SQLite-backed implementations of the core repository
//! traits plus connection pool management.

pub mod database;

use thiserror::Error;

/// Failures raised while wiring up infrastructure, before any domain
/// operation runs
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
