//! App state data access object (key-value store)

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use super::database::{Database, DatabaseError};

/// Data access object for the `app_state` key-value table
#[derive(Clone, Debug)]
pub struct AppStateStore {
    db: Database,
}

impl AppStateStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Set a value (insert or update)
    pub fn set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO app_state (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
                params![key, value, Utc::now().to_rfc3339()],
            )?;
            Ok(())
        })
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        self.db.with_connection(|conn| {
            conn.query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
        })
    }
}
