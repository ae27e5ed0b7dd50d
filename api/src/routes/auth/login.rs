use actix_web::{web, HttpResponse};

use td_core::repositories::{TodoRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::CredentialsRequest;
use crate::handlers::error::domain_error_response;

/// Handler for POST /auth/login
///
/// Authenticates an existing account and responds with a freshly
/// signed bearer token as the plain-text body. Credentials are not
/// validated for shape here; an absent username simply fails the
/// lookup.
///
/// # Errors
/// - 401: Unknown username or wrong password
pub async fn login<U, T>(
    state: web::Data<AppState<U, T>>,
    body: web::Json<CredentialsRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    match state.auth_service.login(&body.username, &body.password).await {
        Ok(token) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(token),
        Err(error) => domain_error_response(&error),
    }
}
