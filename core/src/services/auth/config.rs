//! Configuration for the identity service

/// Tunable settings for `AuthService`
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Bcrypt work factor used when hashing passwords.
    ///
    /// Tests lower this to keep hashing fast; production keeps the
    /// library default.
    pub hash_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }
}
