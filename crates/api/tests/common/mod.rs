//! Shared helpers for HTTP-level integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so tests
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that production uses. The catalog client points at an
//! unroutable local address: any test that reaches the catalog fails fast,
//! which is exactly what cache-hit tests rely on.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use cinelog_api::auth::jwt::{generate_token, JwtConfig};
use cinelog_api::auth::password::hash_password;
use cinelog_api::config::ServerConfig;
use cinelog_api::routes;
use cinelog_api::state::AppState;
use cinelog_catalog::{CatalogClient, CatalogConfig};
use cinelog_db::models::user::{CreateUser, User};
use cinelog_db::repositories::UserRepo;

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough-for-hmac".to_string(),
            token_expiry_mins: 60,
        },
    }
}

/// Catalog client aimed at a port nothing listens on, so fetches fail fast.
pub fn unreachable_catalog() -> CatalogClient {
    CatalogClient::new(CatalogConfig {
        api_key: "test_key".to_string(),
        base_url: "http://127.0.0.1:9".to_string(),
        image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
    })
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
        catalog: Arc::new(unreachable_catalog()),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// User fixtures
// ---------------------------------------------------------------------------

/// Create a user directly in the database and return the row plus the
/// plaintext password used.
pub async fn create_test_user(pool: &PgPool, username: &str) -> (User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hashed,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Mint a bearer token for a user with the test JWT config.
pub fn token_for(user: &User) -> String {
    generate_token(user.id, &test_config().jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
