//! Repository for the `review_likes` table.
//!
//! The one-like-per-(review, user) invariant lives in the schema as
//! `uq_review_likes_review_user`; a duplicate insert surfaces as a unique
//! violation which the API layer maps to 409.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::review_like::ReviewLike;

/// Column list for `review_likes` queries.
const COLUMNS: &str = "id, review_id, user_id, created_at";

/// Provides operations on review likes.
pub struct ReviewLikeRepo;

impl ReviewLikeRepo {
    /// Record a like. Fails with a unique violation if the pair already exists.
    pub async fn create(
        pool: &PgPool,
        review_id: DbId,
        user_id: DbId,
    ) -> Result<ReviewLike, sqlx::Error> {
        let query = format!(
            "INSERT INTO review_likes (review_id, user_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReviewLike>(&query)
            .bind(review_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Remove a like. Returns `true` if a row was deleted; removing an
    /// absent like is a no-op.
    pub async fn delete(pool: &PgPool, review_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM review_likes WHERE review_id = $1 AND user_id = $2")
            .bind(review_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count likes for a review.
    pub async fn count_for_review(pool: &PgPool, review_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM review_likes WHERE review_id = $1")
                .bind(review_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
