//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_db::models::user::{CreateUser, UserResponse};
use cinelog_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32, message = "username must be 3-32 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "password must be 8-128 characters"))]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create an account. A taken username or email surfaces as 409 via the
/// schema's unique constraints.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    validate_input(&input)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        username: input.username,
        email: input.email,
        password_hash,
    };
    let user = UserRepo::create(&state.pool, &create).await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /api/auth/login
///
/// Authenticate with username + password. Returns a time-limited bearer
/// token. Unknown users and wrong passwords get the same 401 message.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let token = generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let expires_in = state.config.jwt.token_expiry_mins * 60;

    Ok(Json(AuthResponse {
        token,
        expires_in,
        user: UserResponse::from(user),
    }))
}
