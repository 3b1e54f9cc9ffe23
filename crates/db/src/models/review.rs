//! Review entity model and DTOs.

use cinelog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Review row. Reviews are immutable once created; a user may review the
/// same movie more than once.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: DbId,
    pub content: String,
    /// Thumbs up / thumbs down.
    pub recommendation: bool,
    /// 1-10, validated at the API boundary.
    pub rating: i32,
    pub created_at: Timestamp,
}

/// Review joined with the cached movie's display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewWithMovie {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: DbId,
    pub content: String,
    pub recommendation: bool,
    pub rating: i32,
    pub created_at: Timestamp,
    pub movie_title: String,
    pub thumbnail: String,
    pub logo: Option<String>,
}

/// DTO for creating a review.
#[derive(Debug)]
pub struct CreateReview {
    pub user_id: DbId,
    pub movie_id: DbId,
    pub content: String,
    pub recommendation: bool,
    pub rating: i32,
}
