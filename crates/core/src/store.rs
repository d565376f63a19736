//! Persistence ports implemented by the database adapter.
//!
//! The service only ever talks to these traits, so tests can swap in an
//! in-memory store and inject failures at any step.

use async_trait::async_trait;

use crate::record::Record;
use crate::types::DbId;

/// Errors raised by store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or the connection was lost.
    #[error("store connection failed: {0}")]
    Connection(String),

    /// A query or mutation failed during execution.
    #[error("store query failed: {0}")]
    Query(String),

    /// A unique constraint rejected the write.
    #[error("unique constraint {constraint} violated")]
    UniqueViolation { constraint: String },
}

/// Read/delete access to one record table, plus transaction creation.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Transaction handle produced by [`RecordStore::begin`].
    ///
    /// Dropping a handle without committing must roll it back.
    type Tx: RecordTransaction + 'static;

    async fn begin(&self) -> Result<Self::Tx, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Record>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Record>, StoreError>;

    /// Rows whose id is in `ids`. Must not touch the store when `ids` is empty.
    async fn find_by_ids(&self, ids: &[DbId]) -> Result<Vec<Record>, StoreError>;

    /// Returns the number of rows deleted.
    async fn delete_by_id(&self, id: DbId) -> Result<u64, StoreError>;

    /// Returns the number of rows deleted. Must not touch the store when `ids` is empty.
    async fn delete_by_ids(&self, ids: &[DbId]) -> Result<u64, StoreError>;
}

/// Statements that run inside an open transaction.
#[async_trait]
pub trait RecordTransaction: Send {
    /// Whether a row with exactly this name exists.
    async fn exists_by_name(&mut self, name: &str) -> Result<bool, StoreError>;

    /// Insert a row and return its generated id.
    async fn insert(&mut self, name: &str) -> Result<DbId, StoreError>;

    async fn commit(self) -> Result<(), StoreError>;

    async fn rollback(self) -> Result<(), StoreError>;
}
