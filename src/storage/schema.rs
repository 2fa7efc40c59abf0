//! Database schema and connection management

use crate::config::IN_MEMORY_SOURCE;
use crate::error::StorageError;
use rusqlite::Connection;
use std::sync::{Mutex, MutexGuard};

/// Database connection manager for player data
///
/// The connection sits behind a mutex so the database can be shared with
/// request handlers; every call holds the lock for a single statement.
pub struct PlayerDatabase {
    conn: Mutex<Connection>,
}

impl PlayerDatabase {
    /// Open the database at `source`, which may be [`IN_MEMORY_SOURCE`].
    ///
    /// The schema is not created here, see [`PlayerDatabase::create_schema`].
    pub fn open(source: &str) -> Result<Self, StorageError> {
        let conn = if source == IN_MEMORY_SOURCE {
            Connection::open_in_memory()?
        } else {
            Connection::open(source)?
        };
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a fresh in-memory database with the schema in place.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let db = Self::open(IN_MEMORY_SOURCE)?;
        db.create_schema()?;
        Ok(db)
    }

    /// Create the players table if it does not exist yet
    pub fn create_schema(&self) -> Result<(), StorageError> {
        self.conn()?.execute(
            "CREATE TABLE IF NOT EXISTS players (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                position TEXT NOT NULL,
                age INTEGER NOT NULL,
                sport TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    pub(crate) fn conn(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::Poisoned)
    }
}
