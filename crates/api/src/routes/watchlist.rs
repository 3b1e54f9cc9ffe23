//! Route definitions for the `/watchlist` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::watchlist;
use crate::state::AppState;

/// Routes mounted at `/watchlist`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(watchlist::list))
        .route("/user/{user_id}", get(watchlist::list_by_user))
        .route("/add", post(watchlist::add))
        .route("/remove/{movie_id}", delete(watchlist::remove))
        .route(
            "/currently-watching/{movie_id}",
            put(watchlist::set_currently_watching),
        )
        .route("/next-up/{movie_id}", put(watchlist::set_next_up))
}
