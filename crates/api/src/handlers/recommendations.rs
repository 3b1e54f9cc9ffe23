//! Handlers for the `/recommendations` resource -- the bounded rolling
//! window of recommended movies.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cinelog_core::types::DbId;
use cinelog_db::models::movie::CreateMovie;
use cinelog_db::models::recommendation::{
    CreateRecommendation, Recommendation, RecommendationWithMovie,
};
use cinelog_db::repositories::RecommendationRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::validate_input;
use crate::middleware::auth::AuthUser;
use crate::movie_cache;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /recommendations/add`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddRecommendationRequest {
    pub movie_id: DbId,
    #[validate(length(max = 1000, message = "note must be at most 1000 characters"))]
    pub note: Option<String>,
    #[validate(length(min = 1, max = 500, message = "title must be 1-500 characters"))]
    pub title: Option<String>,
    pub poster: Option<String>,
    pub logo: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/recommendations
///
/// The authenticated user's window, newest first (at most five entries).
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RecommendationWithMovie>>> {
    let recommendations =
        RecommendationRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(recommendations))
}

/// POST /api/recommendations/add
///
/// Add a recommendation. The movie is cached through first; if the window
/// is full the oldest entry is evicted in the same transaction.
pub async fn add(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AddRecommendationRequest>,
) -> AppResult<(StatusCode, Json<Recommendation>)> {
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

    let create = CreateRecommendation {
        user_id: auth.user_id,
        movie_id: input.movie_id,
        note: input.note,
    };
    let recommendation = RecommendationRepo::add(&state.pool, &create).await?;

    Ok((StatusCode::CREATED, Json(recommendation)))
}
