//! Access guard implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

/// Verifies a request's bearer token and resolves it to a stored user.
///
/// This is the sole mechanism establishing a caller's identity: no
/// other request signal is consulted. The token is decoded and checked
/// before any storage lookup happens.
pub struct GuardService<U: UserRepository> {
    users: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U: UserRepository> GuardService<U> {
    /// Creates a new guard over the given user store and token service
    pub fn new(users: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Authenticates a raw bearer token
    ///
    /// # Returns
    /// * `Ok(Uuid)` - The resolved user identifier
    /// * `Err(AuthError::MissingToken)` - No token was presented
    /// * `Err(TokenError::Expired)` - The token's expiry has passed
    /// * `Err(TokenError::Invalid)` - Bad signature or malformed claims
    /// * `Err(AuthError::UserNotFound)` - The embedded user id does not
    ///   resolve to a stored user (e.g. the account was deleted after
    ///   the token was issued)
    pub async fn authenticate(&self, raw_token: Option<&str>) -> Result<Uuid, DomainError> {
        let token = raw_token.ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.verify(token)?;
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::Invalid))?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(user.id)
    }
}
