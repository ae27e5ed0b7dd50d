//! Repository traits abstracting the persistence layer.
//!
//! The services in this crate only ever talk to storage through these
//! traits; concrete SQL implementations live in the infrastructure
//! crate, and in-memory mocks back the unit tests.

pub mod todo_repository;
pub mod user_repository;

#[cfg(test)]
pub mod mock;

pub use todo_repository::TodoRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use mock::{MockTodoRepository, MockUserRepository};
