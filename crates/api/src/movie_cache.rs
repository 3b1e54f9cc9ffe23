//! Write-through movie metadata cache.
//!
//! Every write path that references a movie id (reviews, watchlist,
//! recommendations) goes through [`ensure_cached`] first, so the local
//! `movies` table always has a descriptive row for any referenced id.
//! Entries are never evicted; [`refresh_stale`] re-syncs rows whose stored
//! images predate the current catalog image host.

use cinelog_catalog::CatalogClient;
use cinelog_core::error::CoreError;
use cinelog_core::types::DbId;
use cinelog_db::models::movie::{CreateMovie, Movie};
use cinelog_db::repositories::MovieRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Ensure `movie_id` has a local cache row, creating one on first reference.
///
/// Resolution order:
/// 1. Cache hit: return the stored row -- zero catalog calls.
/// 2. Cache miss with client-supplied fields (`known`): insert those.
/// 3. Cache miss without fields: fetch from the catalog. A fetch failure
///    aborts the calling write; nothing is inserted with placeholder data.
pub async fn ensure_cached(
    pool: &PgPool,
    catalog: &CatalogClient,
    movie_id: DbId,
    known: Option<CreateMovie>,
) -> AppResult<Movie> {
    if let Some(movie) = MovieRepo::find_by_id(pool, movie_id).await? {
        return Ok(movie);
    }

    let input = match known {
        Some(fields) => fields,
        None => {
            let fetched = catalog.fetch_movie(movie_id).await?;
            CreateMovie {
                id: fetched.id,
                title: fetched.title,
                thumbnail: fetched.thumbnail,
                logo: fetched.logo,
            }
        }
    };

    match MovieRepo::create(pool, &input).await {
        Ok(movie) => Ok(movie),
        // Lost a cache-fill race against a concurrent write; the row exists now.
        Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => {
            MovieRepo::find_by_id(pool, movie_id)
                .await?
                .ok_or(AppError::Core(CoreError::not_found("Movie", movie_id)))
        }
        Err(err) => Err(err.into()),
    }
}

/// Re-fetch metadata for cached movies whose thumbnail does not start with
/// the catalog's current image base, updating each stored row.
///
/// The sweep is best-effort: a movie that fails to fetch is logged and
/// skipped rather than aborting the rest. Returns the number of rows
/// refreshed.
pub async fn refresh_stale(pool: &PgPool, catalog: &CatalogClient) -> AppResult<u64> {
    let stale = MovieRepo::list_stale(pool, catalog.image_base()).await?;
    let mut refreshed = 0;

    for movie in stale {
        match catalog.fetch_movie(movie.id).await {
            Ok(fetched) => {
                MovieRepo::update_metadata(
                    pool,
                    movie.id,
                    &fetched.title,
                    &fetched.thumbnail,
                    fetched.logo.as_deref(),
                )
                .await?;
                refreshed += 1;
            }
            Err(err) => {
                tracing::warn!(movie_id = movie.id, error = %err, "Skipping stale movie refresh");
            }
        }
    }

    Ok(refreshed)
}
