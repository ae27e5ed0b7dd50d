use actix_web::{web, HttpResponse};
use validator::Validate;

use td_core::errors::ValidationError;
use td_core::repositories::{TodoRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::CredentialsRequest;
use crate::handlers::error::domain_error_response;

/// Handler for POST /auth/register
///
/// Creates a new account and responds with a freshly signed bearer
/// token as the plain-text body.
///
/// # Errors
/// - 400: Missing username or password, or the username is taken
pub async fn register<U, T>(
    state: web::Data<AppState<U, T>>,
    body: web::Json<CredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    if body.validate().is_err() {
        return domain_error_response(&ValidationError::MissingCredentials.into());
    }

    match state.auth_service.register(&body.username, &body.password).await {
        Ok(token) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(token),
        Err(error) => domain_error_response(&error),
    }
}
