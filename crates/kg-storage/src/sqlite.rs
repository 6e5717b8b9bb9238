//! SQLite implementation of [`GraphStore`].
//!
//! [`SqliteStore`] owns a single connection. Listings use no `ORDER BY`, so
//! rows come back in whatever order SQLite scans them (insertion order for
//! this workload).

use rusqlite::{params, Connection, Row};

use crate::error::StorageError;
use crate::traits::GraphStore;
use crate::types::{Graph, Node, NodeId, Relationship, RelationshipId};

const SELECT_NODES: &str = "SELECT id, name, type, created_at FROM nodes";
const SELECT_RELATIONSHIPS: &str =
    "SELECT id, from_node, to_node, relationship, created_at FROM relationships";

/// SQLite-backed implementation of [`GraphStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    fn node_from_row(row: &Row<'_>) -> rusqlite::Result<Node> {
        Ok(Node {
            id: NodeId(row.get(0)?),
            name: row.get(1)?,
            kind: row.get(2)?,
            created_at: row.get(3)?,
        })
    }

    fn relationship_from_row(row: &Row<'_>) -> rusqlite::Result<Relationship> {
        Ok(Relationship {
            id: RelationshipId(row.get(0)?),
            from_node: NodeId(row.get(1)?),
            to_node: NodeId(row.get(2)?),
            relationship: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn query_nodes(conn: &Connection) -> Result<Vec<Node>, StorageError> {
        let mut stmt = conn.prepare(SELECT_NODES)?;
        let nodes = stmt
            .query_map([], Self::node_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(nodes)
    }

    fn query_relationships(conn: &Connection) -> Result<Vec<Relationship>, StorageError> {
        let mut stmt = conn.prepare(SELECT_RELATIONSHIPS)?;
        let relationships = stmt
            .query_map([], Self::relationship_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(relationships)
    }
}

impl GraphStore for SqliteStore {
    fn create_node(
        &mut self,
        name: Option<&str>,
        kind: Option<&str>,
    ) -> Result<NodeId, StorageError> {
        self.conn.execute(
            "INSERT INTO nodes (name, type) VALUES (?1, ?2)",
            params![name, kind],
        )?;
        let id = NodeId(self.conn.last_insert_rowid());
        tracing::debug!(%id, "inserted node");
        Ok(id)
    }

    fn list_nodes(&self) -> Result<Vec<Node>, StorageError> {
        Self::query_nodes(&self.conn)
    }

    fn create_relationship(
        &mut self,
        from_node: Option<NodeId>,
        to_node: Option<NodeId>,
        relationship: Option<&str>,
    ) -> Result<RelationshipId, StorageError> {
        self.conn.execute(
            "INSERT INTO relationships (from_node, to_node, relationship) VALUES (?1, ?2, ?3)",
            params![from_node.map(|n| n.0), to_node.map(|n| n.0), relationship],
        )?;
        let id = RelationshipId(self.conn.last_insert_rowid());
        tracing::debug!(%id, "inserted relationship");
        Ok(id)
    }

    fn list_relationships(&self) -> Result<Vec<Relationship>, StorageError> {
        Self::query_relationships(&self.conn)
    }

    fn load_graph(&self) -> Result<Graph, StorageError> {
        // Both scans read from one snapshot.
        let tx = self.conn.unchecked_transaction()?;
        let nodes = Self::query_nodes(&tx)?;
        let relationships = Self::query_relationships(&tx)?;
        tx.commit()?;
        Ok(Graph {
            nodes,
            relationships,
        })
    }
}
