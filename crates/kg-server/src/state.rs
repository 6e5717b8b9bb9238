//! Application state holding the shared store handle.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::Mutex<>>`. The mutex is
//! async-aware so handlers await the lock without blocking the runtime, and
//! a `Mutex` rather than an `RwLock` because `rusqlite::Connection` is
//! `!Sync`.

use std::sync::Arc;

use kg_storage::{SqliteStore, StorageError};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The single store handle opened at startup.
    pub store: Arc<tokio::sync::Mutex<SqliteStore>>,
}

impl AppState {
    /// Creates a new `AppState` backed by the SQLite file at `db_path`,
    /// creating the file and tables if absent.
    pub fn new(db_path: &str) -> Result<Self, StorageError> {
        Ok(Self::from_store(SqliteStore::new(db_path)?))
    }

    /// Creates a new `AppState` with an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        Ok(Self::from_store(SqliteStore::in_memory()?))
    }

    fn from_store(store: SqliteStore) -> Self {
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(store)),
        }
    }
}
