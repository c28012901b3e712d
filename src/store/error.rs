//! Storage error type.

use thiserror::Error;

/// Failure surfaced by the storage adapter.
///
/// `NotFound` is distinguishable from backend failures so handlers can
/// report "could not update/delete" for unknown ids without logging them
/// as database errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
