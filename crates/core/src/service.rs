//! Record service: validation, the transactional create and the simple
//! read/delete operations for one record table.

use async_trait::async_trait;
use futures::FutureExt;
use validator::Validate;

use crate::error::CoreError;
use crate::record::{Record, RecordKind};
use crate::store::{RecordStore, RecordTransaction, StoreError};
use crate::transaction::run_in_transaction;
use crate::types::DbId;
use crate::validation::{CreateRecordRequest, IdRequest, IdsRequest};

/// Operations the HTTP layer needs from a record table.
#[async_trait]
pub trait RecordUseCases: Send + Sync {
    /// Insert a record if no record with the same name exists.
    async fn create(&self, request: CreateRecordRequest) -> Result<DbId, CoreError>;

    async fn find_by_id(&self, request: IdRequest) -> Result<Record, CoreError>;

    async fn find_all(&self) -> Result<Vec<Record>, CoreError>;

    async fn find_by_ids(&self, request: IdsRequest) -> Result<Vec<Record>, CoreError>;

    async fn delete_by_id(&self, request: IdRequest) -> Result<(), CoreError>;

    async fn delete_by_ids(&self, request: IdsRequest) -> Result<(), CoreError>;
}

/// [`RecordUseCases`] backed by a [`RecordStore`].
pub struct RecordService<S> {
    store: S,
    kind: RecordKind,
}

impl<S: RecordStore> RecordService<S> {
    pub fn new(store: S, kind: RecordKind) -> Self {
        Self { store, kind }
    }
}

/// Existence check followed by insert, both on the same transaction.
async fn insert_unique<T>(tx: &mut T, label: &'static str, name: String) -> Result<DbId, CoreError>
where
    T: RecordTransaction + ?Sized,
{
    let exists = tx.exists_by_name(&name).await.map_err(|e| {
        CoreError::Infrastructure(format!("error finding {label} by name: {e}"))
    })?;
    if exists {
        return Err(CoreError::AlreadyExists(format!(
            "{label} with name {name} already exists"
        )));
    }

    tx.insert(&name).await.map_err(|e| match e {
        StoreError::UniqueViolation { .. } => {
            CoreError::AlreadyExists(format!("{label} with name {name} already exists"))
        }
        other => CoreError::Infrastructure(format!(
            "error saving {label} with name: {name}: {other}"
        )),
    })
}

#[async_trait]
impl<S: RecordStore> RecordUseCases for RecordService<S> {
    async fn create(&self, request: CreateRecordRequest) -> Result<DbId, CoreError> {
        request.validate()?;

        let label = self.kind.label();
        let operation = format!("creating {label}");
        let name = request.name;

        let id = run_in_transaction(&self.store, &operation, move |tx| {
            insert_unique(tx, label, name).boxed()
        })
        .await?;

        tracing::info!(record = label, id, "Record created");
        Ok(id)
    }

    async fn find_by_id(&self, request: IdRequest) -> Result<Record, CoreError> {
        request.validate()?;

        let label = self.kind.label();
        let id = request.id;
        match self.store.find_by_id(id).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) => Err(CoreError::NotFound(format!("{label} with id {id} not found"))),
            Err(e) => Err(CoreError::NotFound(format!(
                "error finding {label} with id {id}: {e}"
            ))),
        }
    }

    async fn find_all(&self) -> Result<Vec<Record>, CoreError> {
        let label = self.kind.label();
        self.store
            .find_all()
            .await
            .map_err(|e| CoreError::NotFound(format!("error retrieving all {label}s: {e}")))
    }

    async fn find_by_ids(&self, request: IdsRequest) -> Result<Vec<Record>, CoreError> {
        request.validate()?;
        if request.ids.is_empty() {
            return Ok(Vec::new());
        }

        let label = self.kind.label();
        self.store.find_by_ids(&request.ids).await.map_err(|e| {
            CoreError::NotFound(format!(
                "error retrieving {label}s by ids {:?}: {e}",
                request.ids
            ))
        })
    }

    async fn delete_by_id(&self, request: IdRequest) -> Result<(), CoreError> {
        request.validate()?;

        let label = self.kind.label();
        let id = request.id;
        match self.store.delete_by_id(id).await {
            Ok(0) => Err(CoreError::NotFound(format!("{label} with id {id} not found"))),
            Ok(_) => {
                tracing::info!(record = label, id, "Record deleted");
                Ok(())
            }
            Err(e) => Err(CoreError::NotFound(format!(
                "error deleting {label} with id {id}: {e}"
            ))),
        }
    }

    async fn delete_by_ids(&self, request: IdsRequest) -> Result<(), CoreError> {
        request.validate()?;
        if request.ids.is_empty() {
            return Ok(());
        }

        let label = self.kind.label();
        let deleted = self.store.delete_by_ids(&request.ids).await.map_err(|e| {
            CoreError::NotFound(format!(
                "error deleting {label}s by ids {:?}: {e}",
                request.ids
            ))
        })?;
        tracing::info!(record = label, requested = request.ids.len(), deleted, "Records deleted");
        Ok(())
    }
}
