//! Domain-specific error types and error handling.
//!
//! The display strings double as the plain-text bodies returned at the
//! HTTP boundary, so they are worded for clients rather than logs.

use thiserror::Error;

/// Authentication failures (surfaced as 401 at the boundary)
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer token was presented on a protected request
    #[error("Unauthorized")]
    MissingToken,

    /// No user with the given name, or a token referencing a user
    /// that no longer exists
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidPassword,
}

/// Token verification failures (surfaced as 401 at the boundary)
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    /// Signature mismatch or malformed claims
    #[error("Invalid token")]
    Invalid,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Input validation failures (surfaced as 400 at the boundary)
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username and password are required")]
    MissingCredentials,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Duplicate unique field, e.g. an already-taken username
    #[error("{resource} already exists")]
    Conflict { resource: String },

    /// Resource absent, or owned by a different user. The two are
    /// deliberately indistinguishable.
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
