//! Request payloads.

pub mod auth;
pub mod todo;
