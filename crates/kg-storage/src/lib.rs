//! Storage layer for the knowledge graph service.
//!
//! Provides the [`GraphStore`] trait defining the storage contract used by the
//! HTTP handlers, plus [`SqliteStore`], the embedded SQLite backend.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum
//! - [`types`]: Node, Relationship, Graph and their id newtypes
//! - [`traits`]: GraphStore trait definition
//! - [`schema`]: table definitions and connection setup
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use sqlite::SqliteStore;
pub use traits::GraphStore;
pub use types::{Graph, Node, NodeId, Relationship, RelationshipId};
