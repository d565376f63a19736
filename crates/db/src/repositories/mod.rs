//! Repository layer.
//!
//! Repositories own a `PgPool` and implement the store ports from
//! `idm_core::store`.

pub mod record_repo;

pub use record_repo::{PgRecordTransaction, RecordRepo};
