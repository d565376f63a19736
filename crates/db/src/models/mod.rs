//! Database row structs.
//!
//! Rows derive `FromRow` and convert into the domain types from `idm-core`.

pub mod record;
