use actix_web::{web, HttpResponse};

use td_core::repositories::{TodoRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::error::domain_error_response;
use crate::middleware::auth::AuthContext;

/// Handler for GET /todo
///
/// Responds with the caller's todos as a JSON array, oldest first.
pub async fn list<U, T>(state: web::Data<AppState<U, T>>, auth: AuthContext) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    match state.todo_service.list(auth.user_id).await {
        Ok(todos) => HttpResponse::Ok().json(todos),
        Err(error) => domain_error_response(&error),
    }
}
