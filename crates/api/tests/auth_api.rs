//! HTTP-level integration tests for registration, login, and bearer-token
//! enforcement.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get, get_auth, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Successful registration returns 201 with the safe user DTO (no hash).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "newuser",
        "email": "newuser@test.com",
        "password": "strong_password_123!"
    });
    let response = post_json(app, "/api/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "newuser");
    assert_eq!(json["email"], "newuser@test.com");
    assert!(json["id"].is_number());
    assert!(
        json.get("password_hash").is_none(),
        "response must not leak the password hash"
    );
}

/// A taken username is a 409 conflict.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_username(pool: PgPool) {
    let (_user, _) = create_test_user(&pool, "taken").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "taken",
        "email": "other@test.com",
        "password": "strong_password_123!"
    });
    let response = post_json(app, "/api/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// A taken email is likewise a 409 conflict.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let (_user, _) = create_test_user(&pool, "original").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "different",
        "email": "original@test.com",
        "password": "strong_password_123!"
    });
    let response = post_json(app, "/api/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Malformed email and too-short password are 400 validation errors.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_validation(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "username": "user",
        "email": "not-an-email",
        "password": "strong_password_123!"
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "username": "user",
        "email": "user@test.com",
        "password": "short"
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns a bearer token and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "loginuser").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "loginuser", "password": password });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["token"].is_string(), "response must contain token");
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
}

/// Wrong password and unknown username both return 401 with the same message.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_bad_credentials(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "victim").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "victim", "password": "wrong_password" });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let wrong_pw = body_json(response).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "ghost", "password": "whatever_123" });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let unknown = body_json(response).await;

    assert_eq!(
        wrong_pw["error"], unknown["error"],
        "both failures must be indistinguishable"
    );
}

/// The token from login authenticates protected endpoints.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_token_authenticates(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "tokenuser").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "tokenuser", "password": password });
    let response = post_json(app, "/api/auth/login", body).await;
    let token = body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/watchlist", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Bearer-token enforcement
// ---------------------------------------------------------------------------

/// Protected endpoints reject a missing Authorization header with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_endpoint_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/watchlist").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A garbage token is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_endpoint_rejects_garbage_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/watchlist", "not-a-real-token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
