//! The record shape shared by the `employee` and `role` tables.

use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// Which table a record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Employee,
    Role,
}

impl RecordKind {
    /// Table name in the database schema.
    pub fn table(self) -> &'static str {
        match self {
            RecordKind::Employee => "employee",
            RecordKind::Role => "role",
        }
    }

    /// Singular label used in error and log messages.
    pub fn label(self) -> &'static str {
        // Table names are already singular.
        self.table()
    }
}

/// A persisted employee or role row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_singular_table_names() {
        assert_eq!(RecordKind::Employee.table(), "employee");
        assert_eq!(RecordKind::Role.label(), "role");
    }
}
