//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped in the handler before reaching the repository.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
