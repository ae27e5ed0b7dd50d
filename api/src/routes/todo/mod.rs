//! Per-user todo endpoints, all behind the auth middleware.

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

pub use create::create;
pub use delete::delete;
pub use list::list;
pub use update::update;

use actix_web::HttpResponse;
use td_core::domain::entities::todo::Todo;

/// Builds the mutation responses: a prefix followed by the todo as
/// JSON, all in one plain-text body
pub(crate) fn todo_text_response(prefix: &str, todo: &Todo) -> HttpResponse {
    match serde_json::to_string(todo) {
        Ok(json) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(format!("{}: {}", prefix, json)),
        Err(e) => {
            log::error!("failed to serialize todo {}: {}", todo.id, e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Internal server error")
        }
    }
}
