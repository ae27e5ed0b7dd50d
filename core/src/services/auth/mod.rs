//! Identity service: registration and login.

mod config;
mod service;


pub use config::AuthServiceConfig;
pub use service::AuthService;
