//! Handlers for the `/reviews` resource: review creation and listing,
//! likes, and comments.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_core::types::DbId;
use cinelog_db::models::comment::{Comment, CreateComment};
use cinelog_db::models::movie::CreateMovie;
use cinelog_db::models::review::{CreateReview, Review, ReviewWithMovie};
use cinelog_db::models::review_like::ReviewLike;
use cinelog_db::repositories::{CommentRepo, ReviewLikeRepo, ReviewRepo};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::validate_input;
use crate::middleware::auth::AuthUser;
use crate::movie_cache;
use crate::query::PaginationParams;
use crate::state::AppState;

/// Maximum page size for review listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for review listing.
const DEFAULT_LIMIT: i64 = 50;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /reviews`.
///
/// `movie_title`/`thumbnail`/`logo` are the client's copy of the catalog
/// fields; when both title and thumbnail are present the cache-through
/// inserts them directly instead of fetching from the catalog.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub movie_id: DbId,
    #[validate(length(min = 1, max = 5000, message = "content must be 1-5000 characters"))]
    pub content: String,
    pub recommendation: bool,
    #[validate(range(min = 1, max = 10, message = "rating must be between 1 and 10"))]
    pub rating: i32,
    pub movie_title: Option<String>,
    pub thumbnail: Option<String>,
    pub logo: Option<String>,
}

/// Request body for `POST /reviews/{id}/comments`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "content must be 1-2000 characters"))]
    pub content: String,
}

// ---------------------------------------------------------------------------
// Review handlers
// ---------------------------------------------------------------------------

/// POST /api/reviews
///
/// Create a review. The referenced movie is cached through first, so an
/// unseen id gets a local metadata row before the review row exists.
pub async fn create_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<Review>)> {
    validate_input(&input)?;

    let known = match (input.movie_title, input.thumbnail) {
        (Some(title), Some(thumbnail)) => Some(CreateMovie {
            id: input.movie_id,
            title,
            thumbnail,
            logo: input.logo,
        }),
        _ => None,
    };
    movie_cache::ensure_cached(&state.pool, &state.catalog, input.movie_id, known).await?;

    let create = CreateReview {
        user_id: auth.user_id,
        movie_id: input.movie_id,
        content: input.content,
        recommendation: input.recommendation,
        rating: input.rating,
    };
    let review = ReviewRepo::create(&state.pool, &create).await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/reviews
///
/// List reviews newest first with movie display fields.
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<ReviewWithMovie>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let reviews = ReviewRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(reviews))
}

/// GET /api/reviews/movie/{movieId}
pub async fn list_by_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<Json<Vec<ReviewWithMovie>>> {
    let reviews = ReviewRepo::list_by_movie(&state.pool, movie_id).await?;
    Ok(Json(reviews))
}

/// GET /api/reviews/user/{userId}
pub async fn list_by_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<ReviewWithMovie>>> {
    let reviews = ReviewRepo::list_by_user(&state.pool, user_id).await?;
    Ok(Json(reviews))
}

// ---------------------------------------------------------------------------
// Like handlers
// ---------------------------------------------------------------------------

/// POST /api/reviews/{reviewId}/like
///
/// Like a review. Liking twice surfaces as 409 via
/// `uq_review_likes_review_user`.
pub async fn like_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<ReviewLike>)> {
    require_review(&state.pool, review_id).await?;

    let like = ReviewLikeRepo::create(&state.pool, review_id, auth.user_id).await?;
    Ok((StatusCode::CREATED, Json(like)))
}

/// DELETE /api/reviews/{reviewId}/like
///
/// Remove the authenticated user's like. Unliking an unliked review is a
/// no-op; either way the review can be liked again afterwards.
pub async fn unlike_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
) -> AppResult<StatusCode> {
    require_review(&state.pool, review_id).await?;

    ReviewLikeRepo::delete(&state.pool, review_id, auth.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/reviews/{reviewId}/likes
pub async fn likes_count(
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    require_review(&state.pool, review_id).await?;

    let likes = ReviewLikeRepo::count_for_review(&state.pool, review_id).await?;
    Ok(Json(serde_json::json!({ "likes": likes })))
}

// ---------------------------------------------------------------------------
// Comment handlers
// ---------------------------------------------------------------------------

/// POST /api/reviews/{reviewId}/comments
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
    Json(input): Json<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    validate_input(&input)?;
    require_review(&state.pool, review_id).await?;

    let create = CreateComment {
        review_id,
        user_id: auth.user_id,
        content: input.content,
    };
    let comment = CommentRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /api/reviews/{reviewId}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
) -> AppResult<Json<Vec<Comment>>> {
    require_review(&state.pool, review_id).await?;

    let comments = CommentRepo::list_for_review(&state.pool, review_id).await?;
    Ok(Json(comments))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// 404 unless the review exists.
async fn require_review(pool: &PgPool, review_id: DbId) -> AppResult<Review> {
    ReviewRepo::find_by_id(pool, review_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Review", review_id)))
}
