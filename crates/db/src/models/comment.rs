//! Comment entity model and DTOs.

use cinelog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Append-only comment on a review.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub review_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for creating a comment.
#[derive(Debug)]
pub struct CreateComment {
    pub review_id: DbId,
    pub user_id: DbId,
    pub content: String,
}
