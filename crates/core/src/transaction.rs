//! Scoped transaction helper.
//!
//! [`run_in_transaction`] opens a transaction, runs a body against it and
//! then decides the outcome in one place:
//!
//! - body returned `Ok`  -> commit (a commit failure becomes an error)
//! - body returned `Err` -> roll back, return the body's error unchanged
//! - body panicked       -> roll back, return an infrastructure error that
//!   carries the panic message and any rollback failure
//!
//! If the returned future is dropped mid-flight the transaction handle is
//! dropped with it, and adapters roll back on drop.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::CoreError;
use crate::store::{RecordStore, RecordTransaction};

/// Run `body` inside a fresh transaction from `store`.
///
/// `operation` names the work for error messages and logs, e.g.
/// `"creating employee"`.
pub async fn run_in_transaction<S, T, F>(
    store: &S,
    operation: &str,
    body: F,
) -> Result<T, CoreError>
where
    S: RecordStore + ?Sized,
    T: Send,
    F: for<'t> FnOnce(&'t mut S::Tx) -> BoxFuture<'t, Result<T, CoreError>> + Send,
{
    let mut tx = store.begin().await.map_err(|e| {
        CoreError::Infrastructure(format!("error creating transaction: {e}"))
    })?;

    let outcome = AssertUnwindSafe(body(&mut tx)).catch_unwind().await;

    match outcome {
        Ok(Ok(value)) => {
            tx.commit().await.map_err(|e| {
                tracing::error!(operation, error = %e, "Transaction commit failed");
                CoreError::Infrastructure(format!("error committing transaction: {e}"))
            })?;
            Ok(value)
        }
        Ok(Err(err)) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(
                    operation,
                    error = %err,
                    rollback_error = %rollback_err,
                    "Transaction rollback failed",
                );
            } else {
                tracing::warn!(operation, error = %err, "Transaction rolled back");
            }
            Err(err)
        }
        Err(panic) => {
            let fault = panic_message(panic.as_ref());
            let message = match tx.rollback().await {
                Ok(()) => format!("{operation} panicked: {fault}"),
                Err(rollback_err) => {
                    format!("{operation} panicked: {fault}; rollback failed: {rollback_err}")
                }
            };
            tracing::error!(operation, error = %message, "Transaction body panicked");
            Err(CoreError::Infrastructure(message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
