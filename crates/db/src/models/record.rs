//! Row model for the `employee` and `role` tables.

use idm_core::record::Record;
use idm_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from either record table; both share this column set.
#[derive(Debug, Clone, FromRow)]
pub struct RecordRow {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        Record {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
