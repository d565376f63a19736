//! Route definitions shared by the employee and role tables.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::records::{self, Resource};
use crate::state::AppState;

/// Record routes, mounted once per table.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// DELETE /       -> delete_many  (body: {"ids": [..]})
/// POST   /ids    -> get_many     (body: {"ids": [..]})
/// GET    /{id}   -> get_one
/// DELETE /{id}   -> delete_one
/// ```
pub fn router<R: Resource>() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(records::list::<R>)
                .post(records::create::<R>)
                .delete(records::delete_many::<R>),
        )
        .route("/ids", post(records::get_many::<R>))
        .route(
            "/{id}",
            get(records::get_one::<R>).delete(records::delete_one::<R>),
        )
}
