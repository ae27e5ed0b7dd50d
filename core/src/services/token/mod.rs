//! JWT issuance and verification.

mod service;

#[cfg(test)]
mod tests;

pub use service::TokenService;
