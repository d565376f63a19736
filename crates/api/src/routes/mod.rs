pub mod internal;
pub mod records;

use axum::Router;

use crate::handlers::records::{Employees, Roles};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /employees                 employee records
/// /roles                     role records
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/employees", records::router::<Employees>())
        .nest("/roles", records::router::<Roles>())
}
