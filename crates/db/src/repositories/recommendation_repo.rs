//! Repository for the `recommendations` table.
//!
//! Each user keeps a bounded rolling window of recommended movies: at most
//! [`WINDOW`] rows, oldest evicted first. The read-evict-insert sequence
//! runs in one transaction with the user's rows locked, so concurrent adds
//! for the same user serialize and the bound holds for every observer.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::recommendation::{
    CreateRecommendation, Recommendation, RecommendationWithMovie,
};

/// Maximum number of recommendations retained per user.
pub const WINDOW: usize = 5;

/// Column list for bare `recommendations` queries.
const COLUMNS: &str = "id, user_id, movie_id, note, created_at";

/// Joined column list for recommendation + movie display queries.
const JOINED_COLUMNS: &str =
    "r.id, r.user_id, r.movie_id, r.note, r.created_at, m.title, m.thumbnail, m.logo";

/// Maintains the per-user bounded recommendation window.
pub struct RecommendationRepo;

impl RecommendationRepo {
    /// Add a recommendation, evicting the oldest entries so the user's
    /// count never exceeds [`WINDOW`] after the insert.
    pub async fn add(
        pool: &PgPool,
        input: &CreateRecommendation,
    ) -> Result<Recommendation, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Lock the user's window; oldest first so eviction is a prefix.
        let existing: Vec<(DbId,)> = sqlx::query_as(
            "SELECT id FROM recommendations
             WHERE user_id = $1
             ORDER BY created_at ASC, id ASC
             FOR UPDATE",
        )
        .bind(input.user_id)
        .fetch_all(&mut *tx)
        .await?;

        // Normally evicts exactly one row; more only if the window somehow
        // overfilled (e.g. rows written before the bound existed).
        let evict = (existing.len() + 1).saturating_sub(WINDOW);
        if evict > 0 {
            let oldest: Vec<DbId> = existing[..evict].iter().map(|row| row.0).collect();
            sqlx::query("DELETE FROM recommendations WHERE id = ANY($1)")
                .bind(&oldest)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!(
            "INSERT INTO recommendations (user_id, movie_id, note)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Recommendation>(&query)
            .bind(input.user_id)
            .bind(input.movie_id)
            .bind(&input.note)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// List a user's window joined with movie display fields, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<RecommendationWithMovie>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM recommendations r
             JOIN movies m ON m.id = r.movie_id
             WHERE r.user_id = $1
             ORDER BY r.created_at DESC, r.id DESC"
        );
        sqlx::query_as::<_, RecommendationWithMovie>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
