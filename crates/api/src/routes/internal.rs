use axum::routing::get;
use axum::Router;

use crate::handlers::internal;
use crate::state::AppState;

/// Operational routes mounted at `/internal`.
///
/// ```text
/// GET /info    -> info
/// GET /health  -> health
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/info", get(internal::info))
        .route("/health", get(internal::health))
}
