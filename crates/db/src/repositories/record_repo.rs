//! Repository for the `employee` and `role` tables.
//!
//! One [`RecordRepo`] serves one table, picked by [`RecordKind`]. Table names
//! come from the enum, never from user input, so they are formatted into
//! the SQL directly.

use async_trait::async_trait;
use idm_core::record::{Record, RecordKind};
use idm_core::store::{RecordStore, RecordTransaction, StoreError};
use idm_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::record::RecordRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// sqlx-backed [`RecordStore`] for one record table.
#[derive(Debug, Clone)]
pub struct RecordRepo {
    pool: PgPool,
    kind: RecordKind,
}

impl RecordRepo {
    pub fn new(pool: PgPool, kind: RecordKind) -> Self {
        Self { pool, kind }
    }

    pub fn employees(pool: PgPool) -> Self {
        Self::new(pool, RecordKind::Employee)
    }

    pub fn roles(pool: PgPool) -> Self {
        Self::new(pool, RecordKind::Role)
    }
}

/// An open transaction on one record table.
///
/// The inner sqlx transaction rolls back when dropped uncommitted.
pub struct PgRecordTransaction {
    tx: Transaction<'static, Postgres>,
    kind: RecordKind,
}

/// Map a sqlx error onto the store error taxonomy.
///
/// PostgreSQL reports unique violations as SQLSTATE `23505`.
pub fn store_error(err: sqlx::Error) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            StoreError::UniqueViolation {
                constraint: db_err.constraint().unwrap_or("unknown").to_string(),
            }
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => StoreError::Connection(err.to_string()),
        _ => StoreError::Query(err.to_string()),
    }
}

#[async_trait]
impl RecordStore for RecordRepo {
    type Tx = PgRecordTransaction;

    async fn begin(&self) -> Result<PgRecordTransaction, StoreError> {
        let tx = self.pool.begin().await.map_err(store_error)?;
        Ok(PgRecordTransaction {
            tx,
            kind: self.kind,
        })
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Record>, StoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE id = $1",
            self.kind.table()
        );
        let row = sqlx::query_as::<_, RecordRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(row.map(Record::from))
    }

    async fn find_all(&self) -> Result<Vec<Record>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM {} ORDER BY id ASC", self.kind.table());
        let rows = sqlx::query_as::<_, RecordRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(Record::from).collect())
    }

    async fn find_by_ids(&self, ids: &[DbId]) -> Result<Vec<Record>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM {} WHERE id = ANY($1) ORDER BY id ASC",
            self.kind.table()
        );
        let rows = sqlx::query_as::<_, RecordRow>(&query)
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(Record::from).collect())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<u64, StoreError> {
        let query = format!("DELETE FROM {} WHERE id = $1", self.kind.table());
        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected())
    }

    async fn delete_by_ids(&self, ids: &[DbId]) -> Result<u64, StoreError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let query = format!("DELETE FROM {} WHERE id = ANY($1)", self.kind.table());
        let result = sqlx::query(&query)
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl RecordTransaction for PgRecordTransaction {
    async fn exists_by_name(&mut self, name: &str) -> Result<bool, StoreError> {
        let query = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE name = $1)",
            self.kind.table()
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(name)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(store_error)
    }

    async fn insert(&mut self, name: &str) -> Result<DbId, StoreError> {
        let query = format!(
            "INSERT INTO {} (name) VALUES ($1) RETURNING id",
            self.kind.table()
        );
        sqlx::query_scalar::<_, DbId>(&query)
            .bind(name)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(store_error)
    }

    async fn commit(self) -> Result<(), StoreError> {
        self.tx.commit().await.map_err(store_error)
    }

    async fn rollback(self) -> Result<(), StoreError> {
        self.tx.rollback().await.map_err(store_error)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn pool_failures_are_connection_errors() {
        assert_matches!(
            store_error(sqlx::Error::PoolTimedOut),
            StoreError::Connection(_)
        );
        assert_matches!(store_error(sqlx::Error::PoolClosed), StoreError::Connection(_));
    }

    #[test]
    fn other_failures_are_query_errors() {
        assert_matches!(store_error(sqlx::Error::RowNotFound), StoreError::Query(_));
    }
}
