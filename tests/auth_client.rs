//! Auth client round trips against a mock auth service.
//!
//! Each test binds an axum router on an ephemeral loopback port and points an
//! `ApiConfig` at it, so the real request/settle path runs end to end.

use assignment_portal::config::ApiConfig;
use assignment_portal::net::api::{self, ApiError};
use assignment_portal::net::types::{AuthResponse, LoginRequest, RegisterRequest, Role};
use assignment_portal::state::session::{Session, SessionStatus};
use assignment_portal::util::storage::{KeyValueStore, MemoryStore, NamespacedStore};
use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};

async fn serve(router: Router) -> ApiConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiConfig {
        auth_base_url: format!("http://{addr}/api"),
        submission_base_url: format!("http://{addr}/submissions"),
    }
}

fn student_reply() -> serde_json::Value {
    serde_json::json!({
        "token": "t1",
        "email": "a@b.com",
        "name": "A",
        "role": "STUDENT",
        "message": "ok",
    })
}

fn login_request() -> LoginRequest {
    LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() }
}

fn register_request() -> RegisterRequest {
    RegisterRequest {
        name: "A".to_owned(),
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        department: "cs".to_owned(),
        role: Role::Student,
    }
}

// =============================================================================
// login
// =============================================================================

#[tokio::test]
async fn login_success_returns_reply_and_persists_lowercase_role() {
    let config = serve(Router::new().route("/api/auth/login", post(|| async { Json(student_reply()) }))).await;

    let resp = api::login(&config, &login_request()).await.unwrap();
    assert_eq!(
        resp,
        AuthResponse {
            token: "t1".to_owned(),
            email: "a@b.com".to_owned(),
            name: "A".to_owned(),
            role: "STUDENT".to_owned(),
            message: "ok".to_owned(),
        }
    );

    let raw = MemoryStore::new();
    let session = Session::new(NamespacedStore::new(raw.clone()));
    session.persist(&resp).unwrap();
    assert_eq!(raw.get_item("app:userRole").unwrap().as_deref(), Some("student"));
    assert_eq!(session.status(), SessionStatus::Authenticated);
    assert_eq!(
        api::auth_header(session.store()),
        vec![("Authorization", "Bearer t1".to_owned())]
    );
}

#[tokio::test]
async fn login_rejection_surfaces_server_text() {
    let config = serve(Router::new().route(
        "/api/auth/login",
        post(|| async { (StatusCode::BAD_REQUEST, "invalid credentials") }),
    ))
    .await;

    let err = api::login(&config, &login_request()).await.unwrap_err();
    assert_eq!(err.to_string(), "invalid credentials");
    assert!(matches!(err, ApiError::Rejected { status: 400, .. }));
}

#[tokio::test]
async fn login_sends_json_credentials() {
    let config = serve(Router::new().route(
        "/api/auth/login",
        post(|Json(body): Json<serde_json::Value>| async move {
            if body == serde_json::json!({ "email": "a@b.com", "password": "pw" }) {
                (StatusCode::OK, Json(student_reply()))
            } else {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(serde_json::Value::Null))
            }
        }),
    ))
    .await;

    assert!(api::login(&config, &login_request()).await.is_ok());
}

// =============================================================================
// register
// =============================================================================

#[tokio::test]
async fn register_empty_500_uses_fallback_message() {
    let config = serve(Router::new().route(
        "/api/auth/register",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;

    let err = api::register(&config, &register_request()).await.unwrap_err();
    assert_eq!(err.to_string(), "Registration failed");
}

#[tokio::test]
async fn register_sends_lowercase_role() {
    let config = serve(Router::new().route(
        "/api/auth/register",
        post(|Json(body): Json<serde_json::Value>| async move {
            if body["role"] == "student" && body["department"] == "cs" {
                (StatusCode::OK, Json(student_reply()))
            } else {
                (StatusCode::BAD_REQUEST, Json(serde_json::Value::Null))
            }
        }),
    ))
    .await;

    let resp = api::register(&config, &register_request()).await.unwrap();
    assert_eq!(resp.token, "t1");
}

#[tokio::test]
async fn register_success_without_message_is_accepted() {
    let config = serve(Router::new().route(
        "/api/auth/register",
        post(|| async {
            Json(serde_json::json!({
                "token": "t2",
                "email": "a@b.com",
                "name": "A",
                "role": "FACULTY",
                "message": null,
            }))
        }),
    ))
    .await;

    let resp = api::register(&config, &register_request()).await.unwrap();
    assert_eq!(resp.token, "t2");
    assert_eq!(resp.message, "");

    let session = Session::new(NamespacedStore::new(MemoryStore::new()));
    session.persist(&resp).unwrap();
    assert_eq!(session.role().as_deref(), Some("faculty"));
}

#[tokio::test]
async fn register_conflict_message_is_passed_through() {
    let config = serve(Router::new().route(
        "/api/auth/register",
        post(|| async { (StatusCode::BAD_REQUEST, "Email already exists") }),
    ))
    .await;

    let err = api::register(&config, &register_request()).await.unwrap_err();
    assert_eq!(err.to_string(), "Email already exists");
}

// =============================================================================
// health
// =============================================================================

#[tokio::test]
async fn health_returns_raw_text() {
    let config = serve(Router::new().route("/api/auth/health", get(|| async { "User Service is running" }))).await;
    assert_eq!(api::check_health(&config).await.unwrap(), "User Service is running");
}

#[tokio::test]
async fn health_failure_is_generic() {
    let config = serve(Router::new().route(
        "/api/auth/health",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "db down") }),
    ))
    .await;
    let err = api::check_health(&config).await.unwrap_err();
    assert_eq!(err.to_string(), "Backend service is not available");
}

#[tokio::test]
async fn unknown_route_is_rejected_with_fallback() {
    let config = serve(Router::new()).await;
    let err = api::login(&config, &login_request()).await.unwrap_err();
    assert_eq!(err.to_string(), "Login failed");
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let config = ApiConfig {
        auth_base_url: format!("http://{addr}/api"),
        submission_base_url: format!("http://{addr}/api"),
    };

    let err = api::check_health(&config).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
