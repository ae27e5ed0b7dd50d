//! End-to-end tests driving the full HTTP surface against an
//! in-memory database

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::{test, web};
use serde_json::{json, Value};

use td_core::services::auth::{AuthService, AuthServiceConfig};
use td_core::services::guard::GuardService;
use td_core::services::todo::TodoService;
use td_core::services::token::TokenService;
use td_infra::database::{DatabasePool, SqliteTodoRepository, SqliteUserRepository};
use td_shared::config::JwtConfig;

use td_api::app::{create_app, AppState};
use td_api::middleware::auth::GuardHandle;

const TEST_SECRET: &str = "integration-test-secret";

type TestState = web::Data<AppState<SqliteUserRepository, SqliteTodoRepository>>;

async fn test_state() -> (TestState, web::Data<GuardHandle>) {
    let db = DatabasePool::in_memory().await.expect("in-memory pool");

    let user_repo = Arc::new(SqliteUserRepository::new(db.clone()));
    let todo_repo = Arc::new(SqliteTodoRepository::new(db));

    let token_service = Arc::new(TokenService::new(&JwtConfig::new(TEST_SECRET)));
    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        todo_repo.clone(),
        token_service.clone(),
        // Minimum bcrypt cost keeps the suite fast
        AuthServiceConfig { hash_cost: 4 },
    ));
    let todo_service = Arc::new(TodoService::new(todo_repo));

    let guard: GuardHandle = Arc::new(GuardService::new(user_repo, token_service));

    (
        web::Data::new(AppState {
            auth_service,
            todo_service,
        }),
        web::Data::new(guard),
    )
}

async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

async fn register<S, B>(app: &S, username: &str, password: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "username": username, "password": password }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    body_text(resp).await
}

async fn list_todos<S, B>(app: &S, token: &str) -> Vec<Value>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::get()
        .uri("/todo")
        .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    serde_json::from_str(&body_text(resp).await).expect("JSON array body")
}

/// Splits a `{prefix}: {json}` mutation body into its parts
fn parse_prefixed(body: &str, prefix: &str) -> Value {
    let json = body
        .strip_prefix(&format!("{}: ", prefix))
        .unwrap_or_else(|| panic!("body {:?} missing prefix {:?}", body, prefix));
    serde_json::from_str(json).expect("JSON todo after prefix")
}

#[actix_web::test]
async fn test_health_endpoint() {
    let (state, guard) = test_state().await;
    let app = test::init_service(create_app(state, guard)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_register_seeds_welcome_todo() {
    let (state, guard) = test_state().await;
    let app = test::init_service(create_app(state, guard)).await;

    let token = register(&app, "alice", "s3cret").await;
    assert!(!token.is_empty());

    let todos = list_todos(&app, &token).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["title"], "Welcome to the todo app");
    assert_eq!(todos[0]["completed"], Value::Bool(false));
}

#[actix_web::test]
async fn test_register_duplicate_username() {
    let (state, guard) = test_state().await;
    let app = test::init_service(create_app(state, guard)).await;

    register(&app, "alice", "first").await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "username": "alice", "password": "second" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await, "User already exists");
}

#[actix_web::test]
async fn test_register_missing_credentials() {
    let (state, guard) = test_state().await;
    let app = test::init_service(create_app(state, guard)).await;

    for payload in [json!({}), json!({ "username": "alice" }), json!({ "password": "x" })] {
        let req = test::TestRequest::post()
            .uri("/auth/register")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(resp).await, "Username and password are required");
    }
}

#[actix_web::test]
async fn test_login_roundtrip() {
    let (state, guard) = test_state().await;
    let app = test::init_service(create_app(state, guard)).await;

    register(&app, "alice", "s3cret").await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "username": "alice", "password": "s3cret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // A login token opens the same account
    let token = body_text(resp).await;
    let todos = list_todos(&app, &token).await;
    assert_eq!(todos[0]["title"], "Welcome to the todo app");
}

#[actix_web::test]
async fn test_login_failures() {
    let (state, guard) = test_state().await;
    let app = test::init_service(create_app(state, guard)).await;

    register(&app, "alice", "s3cret").await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "username": "alice", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(resp).await, "Invalid password");

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "username": "nobody", "password": "whatever" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(resp).await, "User not found");
}

#[actix_web::test]
async fn test_todo_create_update_delete_flow() {
    let (state, guard) = test_state().await;
    let app = test::init_service(create_app(state, guard)).await;

    let token = register(&app, "alice", "s3cret").await;

    let req = test::TestRequest::post()
        .uri("/todo")
        .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(json!({ "title": "Buy milk" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let created = parse_prefixed(&body_text(resp).await, "Todo Created");
    assert_eq!(created["title"], "Buy milk");
    assert_eq!(created["completed"], Value::Bool(false));
    let todo_id = created["id"].as_str().expect("todo id").to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/todo/{}", todo_id))
        .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(json!({ "title": "Buy oat milk" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated = parse_prefixed(&body_text(resp).await, "Todo Updated");
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["title"], "Buy oat milk");

    let req = test::TestRequest::delete()
        .uri(&format!("/todo/{}", todo_id))
        .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let deleted = parse_prefixed(&body_text(resp).await, "Todo Deleted");
    assert_eq!(deleted["title"], "Buy oat milk");

    // Deleting again finds nothing
    let req = test::TestRequest::delete()
        .uri(&format!("/todo/{}", todo_id))
        .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Todo not found");

    // Only the welcome todo remains
    let todos = list_todos(&app, &token).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["title"], "Welcome to the todo app");
}

#[actix_web::test]
async fn test_users_cannot_touch_each_others_todos() {
    let (state, guard) = test_state().await;
    let app = test::init_service(create_app(state, guard)).await;

    let alice = register(&app, "alice", "s3cret").await;
    let bob = register(&app, "bob", "hunter2").await;

    let req = test::TestRequest::post()
        .uri("/todo")
        .insert_header((AUTHORIZATION, format!("Bearer {}", alice)))
        .set_json(json!({ "title": "Alice's errand" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created = parse_prefixed(&body_text(resp).await, "Todo Created");
    let todo_id = created["id"].as_str().expect("todo id").to_string();

    // Bob's mutations against Alice's todo look like a missing todo
    let req = test::TestRequest::put()
        .uri(&format!("/todo/{}", todo_id))
        .insert_header((AUTHORIZATION, format!("Bearer {}", bob)))
        .set_json(json!({ "title": "Hijacked" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Todo not found");

    let req = test::TestRequest::delete()
        .uri(&format!("/todo/{}", todo_id))
        .insert_header((AUTHORIZATION, format!("Bearer {}", bob)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Bob's list holds only his own welcome todo
    let todos = list_todos(&app, &bob).await;
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["title"], "Welcome to the todo app");

    // Alice's todo is untouched
    let todos = list_todos(&app, &alice).await;
    assert!(todos.iter().any(|t| t["title"] == "Alice's errand"));
}

#[actix_web::test]
async fn test_guard_rejects_bad_tokens() {
    let (state, guard) = test_state().await;
    let app = test::init_service(create_app(state, guard)).await;

    // No Authorization header at all
    let req = test::TestRequest::get().uri("/todo").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(resp).await, "Unauthorized");

    // Garbage in place of a token
    let req = test::TestRequest::get()
        .uri("/todo")
        .insert_header((AUTHORIZATION, "Bearer not.a.jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(resp).await, "Invalid token");
}

#[actix_web::test]
async fn test_guard_rejects_expired_token() {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    let (state, guard) = test_state().await;
    let app = test::init_service(create_app(state, guard)).await;

    register(&app, "alice", "s3cret").await;

    let now = chrono::Utc::now().timestamp();
    let expired = encode(
        &Header::new(Algorithm::HS256),
        &json!({
            "sub": uuid::Uuid::new_v4().to_string(),
            "iat": now - 7200,
            "exp": now - 3600,
        }),
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("crafted token");

    let req = test::TestRequest::get()
        .uri("/todo")
        .insert_header((AUTHORIZATION, format!("Bearer {}", expired)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(resp).await, "Token expired");
}

#[actix_web::test]
async fn test_guard_rejects_token_for_unknown_user() {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    let (state, guard) = test_state().await;
    let app = test::init_service(create_app(state, guard)).await;

    // Well-signed and current, but the subject was never registered
    let now = chrono::Utc::now().timestamp();
    let orphaned = encode(
        &Header::new(Algorithm::HS256),
        &json!({
            "sub": uuid::Uuid::new_v4().to_string(),
            "iat": now,
            "exp": now + 3600,
        }),
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("crafted token");

    let req = test::TestRequest::get()
        .uri("/todo")
        .insert_header((AUTHORIZATION, format!("Bearer {}", orphaned)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(resp).await, "User not found");
}

#[actix_web::test]
async fn test_malformed_todo_id_reads_as_not_found() {
    let (state, guard) = test_state().await;
    let app = test::init_service(create_app(state, guard)).await;

    let token = register(&app, "alice", "s3cret").await;

    let req = test::TestRequest::put()
        .uri("/todo/not-a-uuid")
        .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
        .set_json(json!({ "title": "Renamed" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(resp).await, "Todo not found");
}
