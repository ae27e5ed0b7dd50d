use actix_web::{web, HttpResponse};
use uuid::Uuid;

use td_core::errors::DomainError;
use td_core::repositories::{TodoRepository, UserRepository};

use crate::app::AppState;
use crate::handlers::error::domain_error_response;
use crate::middleware::auth::AuthContext;

use super::todo_text_response;

/// Handler for DELETE /todo/{id}
///
/// Deletes one of the caller's todos and responds with
/// `Todo Deleted: {json}` holding its final state.
///
/// # Errors
/// - 404: No todo with that id owned by the caller
pub async fn delete<U, T>(
    state: web::Data<AppState<U, T>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    let Ok(todo_id) = Uuid::parse_str(&path) else {
        return domain_error_response(&DomainError::NotFound {
            resource: "Todo".to_string(),
        });
    };

    match state.todo_service.delete(auth.user_id, todo_id).await {
        Ok(todo) => todo_text_response("Todo Deleted", &todo),
        Err(error) => domain_error_response(&error),
    }
}
