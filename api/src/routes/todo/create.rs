use actix_web::{web, HttpResponse};

use td_core::repositories::{TodoRepository, UserRepository};

use crate::app::AppState;
use crate::dto::todo::TodoTitleRequest;
use crate::handlers::error::domain_error_response;
use crate::middleware::auth::AuthContext;

use super::todo_text_response;

/// Handler for POST /todo
///
/// Creates an incomplete todo for the caller and responds with
/// `Todo Created: {json}`.
pub async fn create<U, T>(
    state: web::Data<AppState<U, T>>,
    auth: AuthContext,
    body: web::Json<TodoTitleRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    match state.todo_service.create(auth.user_id, &body.title).await {
        Ok(todo) => todo_text_response("Todo Created", &todo),
        Err(error) => domain_error_response(&error),
    }
}
