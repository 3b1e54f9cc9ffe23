pub mod auth;
pub mod health;
pub mod movies;
pub mod recommendations;
pub mod reviews;
pub mod users;
pub mod watchlist;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                              register (public)
/// /auth/login                                 login (public)
///
/// /movies                                     list cached movies (GET)
/// /movies/refresh-metadata                    catalog drift sweep (POST, auth)
///
/// /reviews                                    list (GET), create (POST, auth)
/// /reviews/movie/{movieId}                    reviews for a movie (GET)
/// /reviews/user/{userId}                      reviews by a user (GET, auth)
/// /reviews/{reviewId}/likes                   like count (GET)
/// /reviews/{reviewId}/like                    like (POST, auth), unlike (DELETE, auth)
/// /reviews/{reviewId}/comments                list (GET), create (POST, auth)
///
/// /watchlist                                  own watchlist (GET, auth)
/// /watchlist/user/{userId}                    another user's watchlist (GET, auth)
/// /watchlist/add                              add entry (POST, auth)
/// /watchlist/remove/{movieId}                 remove entry (DELETE, auth)
/// /watchlist/currently-watching/{movieId}     promote to slot 1 (PUT, auth)
/// /watchlist/next-up/{movieId}                promote to slot 2 (PUT, auth)
///
/// /recommendations                            own window (GET, auth)
/// /recommendations/add                        add, FIFO-evicting (POST, auth)
///
/// /users/profile                              own profile (GET, PUT, auth)
/// /users/{username}                           public profile (GET, auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/movies", movies::router())
        .nest("/reviews", reviews::router())
        .nest("/watchlist", watchlist::router())
        .nest("/recommendations", recommendations::router())
        .nest("/users", users::router())
}
