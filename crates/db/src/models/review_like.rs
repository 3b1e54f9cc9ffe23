//! Review like join entity.

use cinelog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One like by one user on one review. Uniqueness of (review, user) is
/// enforced by `uq_review_likes_review_user`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewLike {
    pub id: DbId,
    pub review_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
}
