//! Per-user todo management.

mod service;


pub use service::TodoService;
