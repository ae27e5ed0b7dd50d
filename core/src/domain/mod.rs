//! Domain entities of the todo service.

pub mod entities;
