//! Repository for the `watchlist` table.
//!
//! A user's watchlist carries two distinguished slots: position 1 is
//! "currently watching" and position 2 is "next up". Promoting an entry into
//! a slot is a clear-then-set update plus a shift of the other entries'
//! positions; the whole sequence runs in one transaction with the user's
//! rows locked so concurrent promotions serialize and the slot-exclusivity
//! indexes (`uq_watchlist_one_current`, `uq_watchlist_one_next`) hold at
//! every statement boundary.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::watchlist::{WatchlistEntry, WatchlistEntryWithMovie};

/// Column list for bare `watchlist` queries.
const COLUMNS: &str = "id, user_id, movie_id, currently_watching, next_up, position, created_at";

/// Joined column list for watchlist + movie display queries.
const JOINED_COLUMNS: &str = "w.id, w.user_id, w.movie_id, w.currently_watching, w.next_up, \
                               w.position, w.created_at, m.title, m.thumbnail, m.logo";

/// Maintains per-user watchlist ordering and the two distinguished slots.
pub struct WatchlistRepo;

impl WatchlistRepo {
    /// Append an entry for (user, movie). New entries are unordered
    /// (`position` NULL) until a slot promotion assigns one. A duplicate
    /// pair fails with a unique violation on `uq_watchlist_user_movie`.
    pub async fn add(
        pool: &PgPool,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<WatchlistEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO watchlist (user_id, movie_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(user_id)
            .bind(movie_id)
            .fetch_one(pool)
            .await
    }

    /// Delete the entry for (user, movie). Returns `true` if a row was
    /// deleted; removing an absent entry is a no-op.
    pub async fn remove(pool: &PgPool, user_id: DbId, movie_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM watchlist WHERE user_id = $1 AND movie_id = $2")
            .bind(user_id)
            .bind(movie_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Promote an entry to the "currently watching" slot.
    ///
    /// In one transaction: lock the user's rows, clear the flag everywhere,
    /// set it on the target with `position = 1`, then shift every other
    /// entry's position up by one. Returns `None` (and rolls back, leaving
    /// the previous slot holder untouched) if the target movie is not on
    /// the user's watchlist.
    pub async fn set_currently_watching(
        pool: &PgPool,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<Option<WatchlistEntry>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Serialize concurrent promotions for the same user.
        sqlx::query("SELECT id FROM watchlist WHERE user_id = $1 FOR UPDATE")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE watchlist SET currently_watching = false WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "UPDATE watchlist SET currently_watching = true, position = 1
             WHERE user_id = $1 AND movie_id = $2
             RETURNING {COLUMNS}"
        );
        let target = sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(user_id)
            .bind(movie_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(entry) = target else {
            // Target not on the watchlist; drop the transaction so the
            // cleared flags roll back.
            return Ok(None);
        };

        sqlx::query(
            "UPDATE watchlist SET position = position + 1
             WHERE user_id = $1 AND movie_id != $2",
        )
        .bind(user_id)
        .bind(movie_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(entry))
    }

    /// Promote an entry to the "next up" slot (`position = 2`).
    ///
    /// Same shape as [`Self::set_currently_watching`], except the shift step
    /// only touches entries at position 2 or later so the "currently
    /// watching" slot keeps position 1.
    pub async fn set_next_up(
        pool: &PgPool,
        user_id: DbId,
        movie_id: DbId,
    ) -> Result<Option<WatchlistEntry>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SELECT id FROM watchlist WHERE user_id = $1 FOR UPDATE")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE watchlist SET next_up = false WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "UPDATE watchlist SET next_up = true, position = 2
             WHERE user_id = $1 AND movie_id = $2
             RETURNING {COLUMNS}"
        );
        let target = sqlx::query_as::<_, WatchlistEntry>(&query)
            .bind(user_id)
            .bind(movie_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(entry) = target else {
            return Ok(None);
        };

        sqlx::query(
            "UPDATE watchlist SET position = position + 1
             WHERE user_id = $1 AND movie_id != $2 AND position >= 2",
        )
        .bind(user_id)
        .bind(movie_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(entry))
    }

    /// List a user's watchlist joined with movie display fields.
    ///
    /// Promoted entries come first in slot order; entries that were never
    /// promoted follow in insertion order.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<WatchlistEntryWithMovie>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM watchlist w
             JOIN movies m ON m.id = w.movie_id
             WHERE w.user_id = $1
             ORDER BY w.position ASC NULLS LAST, w.created_at ASC, w.id ASC"
        );
        sqlx::query_as::<_, WatchlistEntryWithMovie>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
