use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;

use td_core::services::auth::{AuthService, AuthServiceConfig};
use td_core::services::guard::GuardService;
use td_core::services::todo::TodoService;
use td_core::services::token::TokenService;
use td_infra::database::{DatabasePool, SqliteTodoRepository, SqliteUserRepository};
use td_shared::config::AppConfig;

use td_api::app::{create_app, AppState};
use td_api::middleware::auth::GuardHandle;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting todo API server");

    // Load configuration
    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    // Initialize database and repositories
    let db = DatabasePool::new(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let user_repo = Arc::new(SqliteUserRepository::new(db.clone()));
    let todo_repo = Arc::new(SqliteTodoRepository::new(db.clone()));

    // Wire up services
    let token_service = Arc::new(TokenService::new(&config.jwt));
    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        todo_repo.clone(),
        token_service.clone(),
        AuthServiceConfig::default(),
    ));
    let todo_service = Arc::new(TodoService::new(todo_repo));

    let guard: GuardHandle = Arc::new(GuardService::new(user_repo, token_service));

    let state = web::Data::new(AppState {
        auth_service,
        todo_service,
    });
    let guard_data = web::Data::new(guard);

    info!("Server will bind to: {}", bind_address);

    let result = HttpServer::new(move || create_app(state.clone(), guard_data.clone()))
        .bind(&bind_address)?
        .run()
        .await;

    db.close().await;

    result
}
