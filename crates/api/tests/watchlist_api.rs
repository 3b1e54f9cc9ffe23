//! HTTP-level integration tests for the watchlist: cache-through on add,
//! slot promotion exclusivity, and idempotent removal.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, delete_auth, get_auth, post_json_auth, put_json_auth, token_for};
use sqlx::PgPool;

/// Add a movie to the watchlist with client-supplied catalog fields.
async fn add_movie(pool: &PgPool, token: &str, movie_id: i64, title: &str) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "movie_id": movie_id,
        "title": title,
        "poster": format!("https://image.tmdb.org/t/p/w500/{movie_id}.jpg")
    });
    let response = post_json_auth(app, "/api/watchlist/add", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Add / cache-through
// ---------------------------------------------------------------------------

/// Adding an unseen movie creates both the entry and the movie cache row.
/// The catalog client in tests is unreachable, so success proves the
/// client-supplied fields were used without a fetch.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_caches_movie(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "adder").await;
    let token = token_for(&user);

    add_movie(&pool, &token, 42, "Inception").await;

    let cached: (String,) = sqlx::query_as("SELECT title FROM movies WHERE id = 42")
        .fetch_one(&pool)
        .await
        .expect("movie 42 must be cached");
    assert_eq!(cached.0, "Inception");
}

/// Adding without catalog fields for an unseen movie needs a catalog fetch,
/// which fails here -- the whole write aborts with 502 and nothing is stored.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_unseen_movie_without_fields_fails(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "fetcher").await;
    let token = token_for(&user);

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "movie_id": 555 });
    let response = post_json_auth(app, "/api/watchlist/add", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM watchlist WHERE movie_id = 555")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0, "no entry may be written when the fetch fails");
}

/// A second write referencing an already-cached movie needs no fields and
/// no fetch.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_cached_movie_needs_no_fetch(pool: PgPool) {
    let (alice, _) = create_test_user(&pool, "alice").await;
    let (bob, _) = create_test_user(&pool, "bob").await;

    add_movie(&pool, &token_for(&alice), 42, "Inception").await;

    // Bob adds the same movie without any catalog fields; the unreachable
    // catalog proves this is a pure cache hit.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "movie_id": 42 });
    let response = post_json_auth(app, "/api/watchlist/add", body, &token_for(&bob)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies WHERE id = 42")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1, "the cache row is inserted exactly once");
}

/// Adding the same movie twice for one user is a 409 conflict.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_add_conflicts(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "dup").await;
    let token = token_for(&user);

    add_movie(&pool, &token, 42, "Inception").await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "movie_id": 42 });
    let response = post_json_auth(app, "/api/watchlist/add", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Slot promotion
// ---------------------------------------------------------------------------

/// Scenario: add 42 ("Inception"), promote it, add 99, promote 99 -- the
/// flag moves and exactly one entry holds it.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_currently_watching_moves_between_entries(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "watcher").await;
    let token = token_for(&user);

    add_movie(&pool, &token, 42, "Inception").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/watchlist/currently-watching/42",
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["currently_watching"], true);
    assert_eq!(json["position"], 1);

    add_movie(&pool, &token, 99, "Heat").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/watchlist/currently-watching/99",
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/watchlist", &token).await;
    let entries = body_json(response).await;
    let entries = entries.as_array().unwrap();

    let holders: Vec<_> = entries
        .iter()
        .filter(|e| e["currently_watching"] == true)
        .collect();
    assert_eq!(holders.len(), 1, "exactly one entry holds the slot");
    assert_eq!(holders[0]["movie_id"], 99);

    let old = entries.iter().find(|e| e["movie_id"] == 42).unwrap();
    assert_eq!(old["currently_watching"], false);
}

/// The next-up slot is exclusive and the currently-watching entry keeps
/// position 1.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_next_up_slot(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "planner").await;
    let token = token_for(&user);

    add_movie(&pool, &token, 1, "Alien").await;
    add_movie(&pool, &token, 2, "Aliens").await;

    let app = common::build_test_app(pool.clone());
    put_json_auth(
        app,
        "/api/watchlist/currently-watching/1",
        serde_json::json!({}),
        &token,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/watchlist/next-up/2",
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["next_up"], true);
    assert_eq!(json["position"], 2);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/watchlist", &token).await;
    let entries = body_json(response).await;
    let current = entries
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["movie_id"] == 1)
        .unwrap()
        .clone();
    assert_eq!(current["currently_watching"], true);
    assert_eq!(current["position"], 1, "promoting next-up must not move slot 1");
}

/// Promoting a movie that is not on the watchlist is a 404 and leaves the
/// current holder in place.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_promote_absent_movie(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "rollback").await;
    let token = token_for(&user);

    add_movie(&pool, &token, 42, "Inception").await;
    let app = common::build_test_app(pool.clone());
    put_json_auth(
        app,
        "/api/watchlist/currently-watching/42",
        serde_json::json!({}),
        &token,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/watchlist/currently-watching/777",
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/watchlist", &token).await;
    let entries = body_json(response).await;
    let holder = entries
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["movie_id"] == 42)
        .unwrap()
        .clone();
    assert_eq!(
        holder["currently_watching"], true,
        "existing holder must survive a failed promotion"
    );
}

// ---------------------------------------------------------------------------
// Remove
// ---------------------------------------------------------------------------

/// Removal returns 204 and is idempotent: removing an absent entry is a
/// no-op, not an error.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_remove_idempotent(pool: PgPool) {
    let (user, _) = create_test_user(&pool, "remover").await;
    let token = token_for(&user);

    add_movie(&pool, &token, 42, "Inception").await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, "/api/watchlist/remove/42", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = delete_auth(app, "/api/watchlist/remove/42", &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
