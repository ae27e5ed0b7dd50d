//! Authentication request payloads

use serde::Deserialize;
use validator::Validate;

/// Body of POST /auth/register and POST /auth/login.
///
/// Fields default to empty strings so an absent field and an empty one
/// are treated alike.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
}
