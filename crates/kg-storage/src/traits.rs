//! The [`GraphStore`] trait defining the storage contract for the graph.
//!
//! Every operation is a single insert or a full-table scan. Rows are never
//! updated or deleted, so the trait has no such methods.

use crate::error::StorageError;
use crate::types::{Graph, Node, NodeId, Relationship, RelationshipId};

/// The storage contract used by the HTTP handlers.
///
/// The trait is synchronous; callers serialize access to a backend behind a
/// single shared handle.
pub trait GraphStore {
    /// Inserts a node and returns its newly assigned id.
    ///
    /// `None` is stored as SQL NULL, which the `NOT NULL` constraints reject.
    fn create_node(
        &mut self,
        name: Option<&str>,
        kind: Option<&str>,
    ) -> Result<NodeId, StorageError>;

    /// Returns every node in storage order.
    fn list_nodes(&self) -> Result<Vec<Node>, StorageError>;

    /// Inserts a relationship and returns its newly assigned id.
    ///
    /// Endpoints are not required to reference existing nodes.
    fn create_relationship(
        &mut self,
        from_node: Option<NodeId>,
        to_node: Option<NodeId>,
        relationship: Option<&str>,
    ) -> Result<RelationshipId, StorageError>;

    /// Returns every relationship in storage order.
    fn list_relationships(&self) -> Result<Vec<Relationship>, StorageError>;

    /// Returns all nodes and all relationships.
    ///
    /// Either both listings succeed or the whole call fails.
    fn load_graph(&self) -> Result<Graph, StorageError>;
}
