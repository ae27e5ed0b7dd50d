//! Shared response handling.

pub mod error;
