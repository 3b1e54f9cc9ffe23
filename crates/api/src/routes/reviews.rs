//! Route definitions for the `/reviews` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reviews::list_reviews).post(reviews::create_review))
        .route("/movie/{movie_id}", get(reviews::list_by_movie))
        .route("/user/{user_id}", get(reviews::list_by_user))
        .route("/{review_id}/likes", get(reviews::likes_count))
        .route(
            "/{review_id}/like",
            post(reviews::like_review).delete(reviews::unlike_review),
        )
        .route(
            "/{review_id}/comments",
            get(reviews::list_comments).post(reviews::create_comment),
        )
}
