//! Build info and liveness handlers.

use std::time::Duration;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::InfoResponse;
use crate::state::AppState;

/// Upper bound on the database ping behind `/internal/health`.
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// GET /internal/info
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        name: state.config.app_name.clone(),
        version: state.config.app_version.clone(),
    })
}

/// GET /internal/health
///
/// Returns `OK` when the database answers within [`HEALTH_CHECK_TIMEOUT`].
pub async fn health(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    match tokio::time::timeout(HEALTH_CHECK_TIMEOUT, idm_db::health_check(&state.pool)).await {
        Ok(Ok(())) => Ok("OK"),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Database health check failed");
            Err(AppError::Unavailable("DB not reachable".to_string()))
        }
        Err(_) => {
            tracing::warn!(timeout = ?HEALTH_CHECK_TIMEOUT, "Database health check timed out");
            Err(AppError::Unavailable("DB not reachable".to_string()))
        }
    }
}
