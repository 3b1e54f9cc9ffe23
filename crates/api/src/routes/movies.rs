//! Route definitions for the `/movies` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies))
        .route("/refresh-metadata", post(movies::refresh_metadata))
}
