//! # td_core
//!
//! Core business logic and domain layer for the todo service.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types. It performs no I/O of its own; all
//! persistence goes through the repository traits.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use errors::{DomainError, DomainResult};
