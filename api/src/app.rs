//! Application state and factory
//!
//! Holds the service handles shared across workers and builds the
//! Actix application with all routes and middleware attached.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use td_core::repositories::{TodoRepository, UserRepository};
use td_core::services::auth::AuthService;
use td_core::services::todo::TodoService;

use crate::middleware::auth::{GuardHandle, JwtAuth};
use crate::routes::{auth, todo};

/// Shared application state
pub struct AppState<U, T>
where
    U: UserRepository,
    T: TodoRepository,
{
    pub auth_service: Arc<AuthService<U, T>>,
    pub todo_service: Arc<TodoService<T>>,
}

/// Create and configure the application with all dependencies
pub fn create_app<U, T>(
    state: web::Data<AppState<U, T>>,
    guard: web::Data<GuardHandle>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TodoRepository + 'static,
{
    App::new()
        // Add application state and the auth guard
        .app_data(state)
        .app_data(guard)
        // Request logging
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Open auth routes
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(auth::register::<U, T>))
                .route("/login", web::post().to(auth::login::<U, T>)),
        )
        // Todo routes, all guarded
        .service(
            web::scope("/todo")
                .wrap(JwtAuth)
                .route("", web::get().to(todo::list::<U, T>))
                .route("", web::post().to(todo::create::<U, T>))
                .route("/{id}", web::put().to(todo::update::<U, T>))
                .route("/{id}", web::delete().to(todo::delete::<U, T>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "todo-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Resource not found",
    }))
}
