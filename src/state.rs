//! Shared application state.
//!
//! `AppState` is constructed once at startup and shared via `Arc`; it
//! holds no open connection. Every request opens its own SQLite handle
//! through [`AppState::open_db`] and drops it when the handler returns,
//! on every exit path.

use std::path::PathBuf;

use rusqlite::Connection;

use crate::db::{self, DatabaseError};

pub struct AppState {
    pub db_path: PathBuf,
}

impl AppState {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Open a database connection for the current request.
    pub fn open_db(&self) -> Result<Connection, DatabaseError> {
        db::sqlite::open_database(&self.db_path)
    }
}
