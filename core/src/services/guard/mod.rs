//! Access guard: resolves bearer tokens to persisted user identities.

mod service;


pub use service::GuardService;
