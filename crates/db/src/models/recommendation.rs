//! Recommendation entity model and DTOs.

use cinelog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One entry in a user's bounded recommendation window.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recommendation {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: DbId,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

/// Recommendation joined with the cached movie's display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecommendationWithMovie {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: DbId,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub title: String,
    pub thumbnail: String,
    pub logo: Option<String>,
}

/// DTO for adding a recommendation.
#[derive(Debug)]
pub struct CreateRecommendation {
    pub user_id: DbId,
    pub movie_id: DbId,
    pub note: Option<String>,
}
