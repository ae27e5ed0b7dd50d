//! Identity service implementation

use std::sync::Arc;

use crate::domain::entities::todo::Todo;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{TodoRepository, UserRepository};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Handles user registration and login.
///
/// Both operations end in the same place: a freshly signed token for
/// the authenticated user. Passwords only ever exist in memory as the
/// caller's plaintext and the stored bcrypt hash.
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: TodoRepository,
{
    users: Arc<U>,
    todos: Arc<T>,
    tokens: Arc<TokenService>,
    config: AuthServiceConfig,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: TodoRepository,
{
    /// Creates a new identity service
    pub fn new(
        users: Arc<U>,
        todos: Arc<T>,
        tokens: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            users,
            todos,
            tokens,
            config,
        }
    }

    /// Registers a new account and returns a signed token for it.
    ///
    /// The new user is seeded with a single welcome todo. Duplicate
    /// usernames are refused both here and by the storage layer's
    /// unique constraint, so concurrent registrations of the same name
    /// cannot both succeed.
    ///
    /// # Errors
    /// * `ValidationError::MissingCredentials` - Empty username or password
    /// * `DomainError::Conflict` - Username already taken
    pub async fn register(&self, username: &str, password: &str) -> Result<String, DomainError> {
        if username.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingCredentials.into());
        }

        if self.users.exists_by_username(username).await? {
            return Err(DomainError::Conflict {
                resource: "User".to_string(),
            });
        }

        let password_hash = hash_password(password.to_string(), self.config.hash_cost).await?;

        let user = self
            .users
            .create(User::new(username.to_string(), password_hash))
            .await?;

        self.todos.create(Todo::welcome(user.id)).await?;

        tracing::info!(user_id = %user.id, "registered new user");

        self.tokens.issue(user.id)
    }

    /// Authenticates an existing account and returns a signed token.
    ///
    /// # Errors
    /// * `AuthError::UserNotFound` - No account with that username
    /// * `AuthError::InvalidPassword` - Password does not match the stored hash
    pub async fn login(&self, username: &str, password: &str) -> Result<String, DomainError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let matches = verify_password(password.to_string(), user.password_hash.clone()).await?;
        if !matches {
            return Err(AuthError::InvalidPassword.into());
        }

        tracing::debug!(user_id = %user.id, "user logged in");

        self.tokens.issue(user.id)
    }
}

/// Hashes a password on the blocking thread pool.
///
/// Bcrypt at production cost takes long enough to stall an async
/// worker, so the hash runs under `spawn_blocking`.
async fn hash_password(password: String, cost: u32) -> Result<String, DomainError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("password hashing task failed: {}", e),
        })?
        .map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {}", e),
        })
}

/// Verifies a password against a stored hash on the blocking thread pool
async fn verify_password(password: String, hash: String) -> Result<bool, DomainError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("password verification task failed: {}", e),
        })?
        .map_err(|e| DomainError::Internal {
            message: format!("password verification failed: {}", e),
        })
}
