use cinelog_core::types::DbId;

/// Failures talking to the external catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Transport-level failure (connection, timeout, body decode).
    #[error("Catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog has no movie with this id.
    #[error("Movie {0} not found in catalog")]
    NotFound(DbId),

    /// The catalog answered with an unexpected status.
    #[error("Catalog returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The catalog entry exists but lacks a poster to display.
    #[error("Catalog entry for movie {0} has no poster")]
    MissingPoster(DbId),
}
