//! IDM domain core.
//!
//! Record types, domain error kinds, request validation, the persistence
//! ports and the record service. Has no database dependency; the sqlx
//! adapter lives in `idm-db`.

pub mod error;
pub mod record;
pub mod service;
pub mod store;
pub mod transaction;
pub mod types;
pub mod validation;
