//! Watchlist entry model and DTOs.

use cinelog_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Watchlist row with the two distinguished slots.
///
/// `position` is NULL for entries that were never promoted; slot promotion
/// assigns 1 ("currently watching") or 2 ("next up") and shifts the rest.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WatchlistEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: DbId,
    pub currently_watching: bool,
    pub next_up: bool,
    pub position: Option<i32>,
    pub created_at: Timestamp,
}

/// Watchlist entry joined with the cached movie's display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WatchlistEntryWithMovie {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: DbId,
    pub currently_watching: bool,
    pub next_up: bool,
    pub position: Option<i32>,
    pub created_at: Timestamp,
    pub title: String,
    pub thumbnail: String,
    pub logo: Option<String>,
}
