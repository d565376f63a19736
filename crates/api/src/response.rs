//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "data": ... }` envelope. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`.

use idm_core::types::DbId;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Payload of a successful create: `{ "id": N }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
}

/// Payload of `GET /internal/info`.
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
}
