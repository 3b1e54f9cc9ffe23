//! Repository for the `reviews` table.
//!
//! Reviews are append-only; display fields (title, thumbnail, logo) are
//! joined from the movie cache rather than denormalized onto the row.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review, ReviewWithMovie};

/// Column list for bare `reviews` queries.
const COLUMNS: &str = "id, user_id, movie_id, content, recommendation, rating, created_at";

/// Joined column list for review + movie display queries.
const JOINED_COLUMNS: &str = "r.id, r.user_id, r.movie_id, r.content, r.recommendation, \
                               r.rating, r.created_at, m.title AS movie_title, m.thumbnail, m.logo";

/// Provides operations on reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (user_id, movie_id, content, recommendation, rating)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.user_id)
            .bind(input.movie_id)
            .bind(&input.content)
            .bind(input.recommendation)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// Find a review by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reviews newest first, joined with movie display fields.
    pub async fn list(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ReviewWithMovie>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM reviews r
             JOIN movies m ON m.id = r.movie_id
             ORDER BY r.created_at DESC, r.id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ReviewWithMovie>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List all reviews for one movie, joined with its display fields.
    pub async fn list_by_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<ReviewWithMovie>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM reviews r
             JOIN movies m ON m.id = r.movie_id
             WHERE r.movie_id = $1
             ORDER BY r.created_at DESC, r.id DESC"
        );
        sqlx::query_as::<_, ReviewWithMovie>(&query)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// List all reviews written by one user.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ReviewWithMovie>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM reviews r
             JOIN movies m ON m.id = r.movie_id
             WHERE r.user_id = $1
             ORDER BY r.created_at DESC, r.id DESC"
        );
        sqlx::query_as::<_, ReviewWithMovie>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
