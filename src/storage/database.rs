//! SQLite-backed key-value preference store
//!
//! A single `settings` table maps string keys to string values. Writes are
//! upserts, so every key holds exactly one value.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised by the preference store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("could not prepare preference database location: {0}")]
    Io(#[from] std::io::Error),
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS settings (
    key        TEXT PRIMARY KEY NOT NULL,
    value      TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);";

/// Key-value store over a SQLite connection
pub struct PreferenceStore {
    conn: Connection,
}

impl PreferenceStore {
    /// Open or create the store at `path`
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        debug!("Opened preference store at {:?}", path);
        Self::with_connection(conn)
    }

    /// Open a store that lives only for this process
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Create tables if they do not exist
    pub fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Read the value stored under `key`
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Store `value` under `key`, replacing any previous value
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO settings (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now'))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete `key`. Returns whether a value was present.
    #[allow(dead_code)]
    pub fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM settings WHERE key = ?1", params![key])?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = PreferenceStore::open_in_memory().unwrap();
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_then_overwrite() {
        let store = PreferenceStore::open_in_memory().unwrap();

        store.set("greeting", "hello").unwrap();
        assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));

        store.set("greeting", "").unwrap();
        assert_eq!(store.get("greeting").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_remove() {
        let store = PreferenceStore::open_in_memory().unwrap();
        store.set("a", "1").unwrap();

        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("preferences.db");

        {
            let store = PreferenceStore::open(&path).unwrap();
            store.set("note", "line one\nline two").unwrap();
        }

        let store = PreferenceStore::open(&path).unwrap();
        assert_eq!(
            store.get("note").unwrap().as_deref(),
            Some("line one\nline two")
        );
    }

    #[test]
    fn test_open_on_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PreferenceStore::open(dir.path()).is_err());
    }
}
