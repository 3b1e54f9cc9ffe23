//! Handlers for the `/users` resource (profiles).

use axum::extract::{Path, State};
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_db::models::movie::Movie;
use cinelog_db::models::user::{PublicProfile, UpdateProfile, User, UserResponse};
use cinelog_db::repositories::{MovieRepo, UserRepo};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /users/profile`. All fields optional; omitted
/// fields keep their stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 2000, message = "bio must be at most 2000 characters"))]
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    #[validate(length(max = 20, message = "at most 20 favorite genres"))]
    pub favorite_genres: Option<Vec<String>>,
    #[validate(length(max = 5, message = "at most 5 top movies"))]
    pub top_movies: Option<Vec<i64>>,
}

/// Own profile with the cached rows for `top_movies`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub top_movies_details: Vec<Movie>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/users/profile
///
/// The authenticated user's profile, with cached movie rows for the stored
/// top-movie ids.
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ProfileResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;

    let response = profile_response(&state.pool, user).await?;
    Ok(Json(response))
}

/// PUT /api/users/profile
///
/// Update bio, profile picture, favorite genres, and/or top movies.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<ProfileResponse>> {
    validate_input(&input)?;

    let update = UpdateProfile {
        bio: input.bio,
        profile_picture: input.profile_picture,
        favorite_genres: input.favorite_genres,
        top_movies: input.top_movies,
    };
    let user = UserRepo::update_profile(&state.pool, auth.user_id, &update)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;

    let response = profile_response(&state.pool, user).await?;
    Ok(Json(response))
}

/// GET /api/users/{username}
///
/// Public profile of any user, looked up case-insensitively. Never exposes
/// the email address or password hash.
pub async fn get_by_username(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<PublicProfile>> {
    let user = UserRepo::find_by_username_ci(&state.pool, &username)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            key: username,
        }))?;

    Ok(Json(PublicProfile::from(user)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the own-profile response: the safe DTO plus cached movie details.
async fn profile_response(pool: &PgPool, user: User) -> AppResult<ProfileResponse> {
    let details = if user.top_movies.is_empty() {
        Vec::new()
    } else {
        MovieRepo::find_by_ids(pool, &user.top_movies).await?
    };

    Ok(ProfileResponse {
        user: UserResponse::from(user),
        top_movies_details: details,
    })
}
