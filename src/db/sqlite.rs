use std::path::Path;

use rusqlite::Connection;

use super::DatabaseError;

/// Open a SQLite connection to the given path and make sure the schema exists.
///
/// A connection is opened per request and dropped at the end of it; the
/// schema check is a no-op once the table is in place.
pub fn open_database(path: &Path) -> Result<Connection, DatabaseError> {
    let conn = Connection::open(path)?;
    configure_pragmas(&conn)?;
    ensure_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing)
pub fn open_memory_database() -> Result<Connection, DatabaseError> {
    let conn = Connection::open_in_memory()?;
    configure_pragmas(&conn)?;
    ensure_schema(&conn)?;
    Ok(conn)
}

fn configure_pragmas(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}

/// Create the `appointments` table if it is absent. Idempotent; safe to
/// call at startup and again on every connection open.
///
/// `AUTOINCREMENT` keeps ids monotonic — an id freed by a delete is
/// never handed out again.
pub fn ensure_schema(conn: &Connection) -> Result<(), DatabaseError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS appointments (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             name TEXT NOT NULL,
             email TEXT NOT NULL,
             date TEXT NOT NULL,
             time TEXT NOT NULL,
             reason TEXT NOT NULL
         );",
    )
    .map_err(|e| DatabaseError::SchemaFailed {
        reason: e.to_string(),
    })?;
    Ok(())
}
