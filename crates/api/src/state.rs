use std::sync::Arc;

use cinelog_catalog::CatalogClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinelog_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// External movie-catalog client used by the cache-through path.
    pub catalog: Arc<CatalogClient>,
}
