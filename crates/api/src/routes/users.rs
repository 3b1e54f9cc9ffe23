//! Route definitions for the `/users` resource.
//!
//! The literal `/profile` route is registered before the `/{username}`
//! capture; Axum prefers the literal match.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/{username}", get(users::get_by_username))
}
