//! Handlers for the `/watchlist` resource, including the two distinguished
//! slot promotions ("currently watching" and "next up").

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_core::types::DbId;
use cinelog_db::models::movie::CreateMovie;
use cinelog_db::models::watchlist::{WatchlistEntry, WatchlistEntryWithMovie};
use cinelog_db::repositories::WatchlistRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::middleware::auth::AuthUser;
use crate::movie_cache;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /watchlist/add`.
///
/// `title`/`poster`/`logo` are the client's copy of the catalog fields; when
/// title and poster are both present the cache-through inserts them directly.
#[derive(Debug, Deserialize, Validate)]
pub struct AddWatchlistRequest {
    pub movie_id: DbId,
    #[validate(length(min = 1, max = 500, message = "title must be 1-500 characters"))]
    pub title: Option<String>,
    pub poster: Option<String>,
    pub logo: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/watchlist
///
/// The authenticated user's watchlist: slot holders first, then the rest in
/// insertion order.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<WatchlistEntryWithMovie>>> {
    let entries = WatchlistRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(entries))
}

/// GET /api/watchlist/user/{userId}
///
/// Another user's watchlist (used for profile pages).
pub async fn list_by_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<WatchlistEntryWithMovie>>> {
    let entries = WatchlistRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(entries))
}

/// POST /api/watchlist/add
///
/// Add a movie to the watchlist. The movie is cached through first; adding
/// the same movie twice surfaces as 409 via `uq_watchlist_user_movie`.
pub async fn add(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AddWatchlistRequest>,
) -> AppResult<(StatusCode, Json<WatchlistEntry>)> {
    validate_input(&input)?;

    let known = match (input.title, input.poster) {
        (Some(title), Some(poster)) => Some(CreateMovie {
            id: input.movie_id,
            title,
            thumbnail: poster,
            logo: input.logo,
        }),
        _ => None,
    };
    movie_cache::ensure_cached(&state.pool, &state.catalog, input.movie_id, known).await?;

    let entry = WatchlistRepo::add(&state.pool, auth.user_id, input.movie_id).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// DELETE /api/watchlist/remove/{movieId}
///
/// Remove a movie from the watchlist. Removing an absent entry is a no-op,
/// not an error.
pub async fn remove(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<StatusCode> {
    WatchlistRepo::remove(&state.pool, auth.user_id, movie_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/watchlist/currently-watching/{movieId}
///
/// Promote a watchlist entry to the "currently watching" slot. 404 if the
/// movie is not on the user's watchlist; the previous holder keeps the slot
/// in that case.
pub async fn set_currently_watching(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<WatchlistEntry>> {
    let entry = WatchlistRepo::set_currently_watching(&state.pool, auth.user_id, movie_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Watchlist entry", movie_id)))?;

    Ok(Json(entry))
}

/// PUT /api/watchlist/next-up/{movieId}
///
/// Promote a watchlist entry to the "next up" slot.
pub async fn set_next_up(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<WatchlistEntry>> {
    let entry = WatchlistRepo::set_next_up(&state.pool, auth.user_id, movie_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Watchlist entry", movie_id)))?;

    Ok(Json(entry))
}
