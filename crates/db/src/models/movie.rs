//! Movie cache entry model and DTOs.

use cinelog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Cached movie row. The id is the external catalog's id; rows are created
/// lazily the first time a write path references an unseen id.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    /// Absolute poster URL.
    pub thumbnail: String,
    /// Absolute logo URL, when the catalog has one.
    pub logo: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a cache entry.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub id: DbId,
    pub title: String,
    pub thumbnail: String,
    pub logo: Option<String>,
}
