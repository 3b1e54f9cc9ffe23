//! Route definitions for the `/recommendations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::recommendations;
use crate::state::AppState;

/// Routes mounted at `/recommendations`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recommendations::list))
        .route("/add", post(recommendations::add))
}
