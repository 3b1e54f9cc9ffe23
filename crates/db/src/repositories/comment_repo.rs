//! Repository for the `comments` table.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

/// Column list for `comments` queries.
const COLUMNS: &str = "id, review_id, user_id, content, created_at";

/// Provides operations on review comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Append a comment to a review, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (review_id, user_id, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.review_id)
            .bind(input.user_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// List comments for a review, oldest first.
    pub async fn list_for_review(
        pool: &PgPool,
        review_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE review_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(review_id)
            .fetch_all(pool)
            .await
    }
}
