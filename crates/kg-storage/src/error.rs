//! Storage error types for kg-storage.

use thiserror::Error;

/// Errors produced by storage operations.
///
/// Constraint violations (e.g. a NULL `type`) surface as
/// [`StorageError::Sqlite`] carrying SQLite's own message.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite call failed.
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
}
