//! Handlers for the employee and role record tables.
//!
//! Both tables expose the same operations, so each handler is generic over
//! a [`Resource`] marker that selects the table.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use idm_core::record::RecordKind;
use idm_core::types::DbId;
use idm_core::validation::{CreateRecordRequest, IdRequest, IdsRequest};

use crate::error::AppResult;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// Selects which record table a handler serves.
pub trait Resource: Send + Sync + 'static {
    const KIND: RecordKind;
}

/// Marker for `/api/v1/employees`.
pub struct Employees;

/// Marker for `/api/v1/roles`.
pub struct Roles;

impl Resource for Employees {
    const KIND: RecordKind = RecordKind::Employee;
}

impl Resource for Roles {
    const KIND: RecordKind = RecordKind::Role;
}

/// POST /api/v1/{records}
///
/// Create a record with a unique name. Returns 201 with the new id.
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    payload: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    tracing::debug!(record = R::KIND.label(), name = %input.name, "Create request received");

    let id = state.records(R::KIND).create(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedResponse { id },
        }),
    ))
}

/// GET /api/v1/{records}
pub async fn list<R: Resource>(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = state.records(R::KIND).find_all().await?;
    tracing::debug!(record = R::KIND.label(), count = records.len(), "Records listed");

    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/{records}/{id}
pub async fn get_one<R: Resource>(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    let record = state.records(R::KIND).find_by_id(IdRequest { id }).await?;

    Ok(Json(DataResponse { data: record }))
}

/// POST /api/v1/{records}/ids
///
/// Fetch every record whose id is in the body. Unknown ids are skipped.
pub async fn get_many<R: Resource>(
    State(state): State<AppState>,
    payload: Result<Json<IdsRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let records = state.records(R::KIND).find_by_ids(input).await?;

    Ok(Json(DataResponse { data: records }))
}

/// DELETE /api/v1/{records}/{id}
pub async fn delete_one<R: Resource>(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = path?;
    state.records(R::KIND).delete_by_id(IdRequest { id }).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/{records}
///
/// Delete every record whose id is in the body.
pub async fn delete_many<R: Resource>(
    State(state): State<AppState>,
    payload: Result<Json<IdsRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let count = input.ids.len();
    state.records(R::KIND).delete_by_ids(input).await?;
    tracing::info!(record = R::KIND.label(), count, "Records deleted by ids");

    Ok(StatusCode::NO_CONTENT)
}
