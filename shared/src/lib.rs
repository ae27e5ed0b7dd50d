//! # td_shared
//!
//! Shared configuration types for the todo service. Every other crate
//! in the workspace reads its settings through the structs defined here.

pub mod config;
