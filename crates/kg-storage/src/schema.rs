//! SQL schema and connection setup for the SQLite backend.
//!
//! The schema is a single `CREATE TABLE IF NOT EXISTS` batch run on every
//! open. There is no version tracking: opening an existing file leaves its
//! rows untouched.

use rusqlite::Connection;

use crate::error::StorageError;

/// Table definitions for `nodes` and `relationships`.
///
/// The foreign keys on `relationships` are declarative only; enforcement is
/// switched off in [`configure_and_init`].
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS nodes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    type TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS relationships (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    from_node INTEGER NOT NULL,
    to_node INTEGER NOT NULL,
    relationship TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (from_node) REFERENCES nodes(id),
    FOREIGN KEY (to_node) REFERENCES nodes(id)
);
";

/// Opens (or creates) a SQLite database at `path` with WAL mode and both
/// tables present.
pub fn open_database(path: &str) -> Result<Connection, StorageError> {
    let conn = Connection::open(path)?;
    configure_and_init(&conn)?;
    tracing::debug!(path, "opened knowledge graph database");
    Ok(conn)
}

/// Opens a private in-memory SQLite database with both tables present.
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory()?;
    configure_and_init(&conn)?;
    Ok(conn)
}

/// Configures pragmas and creates any missing tables.
fn configure_and_init(conn: &Connection) -> Result<(), StorageError> {
    // WAL is a no-op for in-memory databases ("memory" comes back).
    let _mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    // Relationship endpoints are intentionally unchecked.
    conn.pragma_update(None, "foreign_keys", "OFF")?;

    conn.execute_batch(SCHEMA)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare(
                "SELECT name FROM sqlite_master
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
                 ORDER BY name",
            )
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<String>, _>>()
            .unwrap()
    }

    #[test]
    fn creates_both_tables() {
        let conn = open_in_memory().unwrap();
        assert_eq!(table_names(&conn), vec!["nodes", "relationships"]);
    }

    #[test]
    fn schema_init_is_idempotent() {
        let conn = open_in_memory().unwrap();
        conn.execute("INSERT INTO nodes (name, type) VALUES ('a', 'b')", [])
            .unwrap();

        configure_and_init(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM nodes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(table_names(&conn), vec!["nodes", "relationships"]);
    }

    #[test]
    fn foreign_keys_are_not_enforced() {
        let conn = open_in_memory().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 0);
    }
}
