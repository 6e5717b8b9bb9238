//! Row types for the two stored tables.
//!
//! Ids are newtypes over `i64` to match SQLite's `INTEGER PRIMARY KEY`; they
//! serialize as bare JSON numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a stored node, assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub i64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a stored relationship, assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipId(pub i64);

impl fmt::Display for RelationshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A row of the `nodes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    /// Free-form entity type, stored in the `type` column.
    #[serde(rename = "type")]
    pub kind: String,
    /// `CURRENT_TIMESTAMP` at insert (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub created_at: String,
}

/// A row of the `relationships` table: a directed, labeled edge.
///
/// `from_node` and `to_node` are not checked against existing nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RelationshipId,
    pub from_node: NodeId,
    pub to_node: NodeId,
    pub relationship: String,
    pub created_at: String,
}

/// Every node and every relationship, as returned by a full graph fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub relationships: Vec<Relationship>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_serializes_kind_as_type() {
        let node = Node {
            id: NodeId(7),
            name: "Alice".into(),
            kind: "person".into(),
            created_at: "2024-01-01 00:00:00".into(),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "Alice",
                "type": "person",
                "created_at": "2024-01-01 00:00:00"
            })
        );
    }

    #[test]
    fn ids_display_as_bare_numbers() {
        assert_eq!(NodeId(5).to_string(), "5");
        assert_eq!(RelationshipId(12).to_string(), "12");
    }

    #[test]
    fn empty_graph_serializes_to_empty_arrays() {
        let json = serde_json::to_value(Graph::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "nodes": [], "relationships": [] }));
    }
}
