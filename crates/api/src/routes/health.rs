//! Liveness endpoint, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health
///
/// Returns 200 when the server is up and the database answers a ping.
async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    cinelog_db::health_check(&state.pool).await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
