//! Handlers for the `/movies` resource (cache listing and drift refresh).

use axum::extract::State;
use axum::Json;
use cinelog_db::models::movie::Movie;
use cinelog_db::repositories::MovieRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::movie_cache;
use crate::state::AppState;

/// GET /api/movies
///
/// List every movie in the local metadata cache.
pub async fn list_movies(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(movies))
}

/// POST /api/movies/refresh-metadata
///
/// Re-fetch metadata for cached movies whose stored images have drifted
/// from the catalog's current image host. Returns the refreshed count.
pub async fn refresh_metadata(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let refreshed = movie_cache::refresh_stale(&state.pool, &state.catalog).await?;

    tracing::info!(user_id = auth.user_id, refreshed, "Movie metadata refresh completed");
    Ok(Json(serde_json::json!({ "refreshed": refreshed })))
}
