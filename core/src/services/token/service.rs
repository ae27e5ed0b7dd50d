//! Token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use td_shared::config::JwtConfig;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

/// Stateless service issuing and verifying HS256 access tokens.
///
/// Verification is a pure function of the token string and the secret;
/// it touches no storage and has no side effects.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_secs: i64,
}

impl TokenService {
    /// Creates a new token service from the JWT configuration
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // A token whose expiry has passed must be rejected outright,
        // so no clock leeway.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            expiry_secs: config.token_expiry_secs,
        }
    }

    /// Issues a signed token embedding `user_id`, valid for the
    /// configured lifetime
    pub fn issue(&self, user_id: Uuid) -> Result<String, DomainError> {
        let claims = Claims::new(user_id, self.expiry_secs);
        self.encode(&claims)
    }

    /// Encodes arbitrary claims into a JWT
    pub(crate) fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Decodes and verifies a token, distinguishing an expired token
    /// from one that is malformed or carries a bad signature
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::Expired)
                } else {
                    DomainError::Token(TokenError::Invalid)
                }
            })?;

        Ok(token_data.claims)
    }
}
