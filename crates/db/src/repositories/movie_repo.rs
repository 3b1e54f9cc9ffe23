//! Repository for the `movies` cache table.
//!
//! Rows are created lazily by the cache-through path and refreshed when the
//! stored metadata has drifted from the catalog. Nothing deletes them.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie};

/// Column list for `movies` queries.
const COLUMNS: &str = "id, title, thumbnail, logo, created_at, updated_at";

/// Provides operations on the movie metadata cache.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a cache entry with the external catalog id as primary key.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (id, title, thumbnail, logo)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(input.id)
            .bind(&input.title)
            .bind(&input.thumbnail)
            .bind(&input.logo)
            .fetch_one(pool)
            .await
    }

    /// Find a cached movie by its catalog id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cached movies.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Fetch the cached rows for a set of ids (used for `top_movies` detail).
    ///
    /// Ids with no cache entry are silently absent from the result.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Movie>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List movies whose thumbnail does not start with the given image base,
    /// i.e. entries whose stored metadata predates the current catalog image
    /// host and should be refreshed.
    pub async fn list_stale(pool: &PgPool, image_base: &str) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE thumbnail NOT LIKE $1 || '%'");
        sqlx::query_as::<_, Movie>(&query)
            .bind(image_base)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the descriptive fields of a cache entry.
    ///
    /// Returns `true` if a row was updated.
    pub async fn update_metadata(
        pool: &PgPool,
        id: DbId,
        title: &str,
        thumbnail: &str,
        logo: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movies SET title = $2, thumbnail = $3, logo = $4, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(title)
        .bind(thumbnail)
        .bind(logo)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
