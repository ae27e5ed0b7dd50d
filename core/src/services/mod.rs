//! Business services composing repositories and token handling.

pub mod auth;
pub mod guard;
pub mod todo;
pub mod token;
