//! SQLite-backed key-value storage.
//!
//! A single `kv` table mirrors the browser's local storage: one row per key,
//! each value an opaque document.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use crate::error::Result;
use crate::storage::traits::StorageAdapter;
use crate::storage::STORAGE_KEY;

pub struct SqliteStorage {
    conn: Connection,
    key: String,
    location: String,
}

impl SqliteStorage {
    /// Open (or create) a key-value database file.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::init(conn, path.display().to_string())
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, ":memory:".to_string())
    }

    /// Use a key other than the default ledger key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    fn init(conn: Connection, location: String) -> Result<Self> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;
        Ok(Self {
            conn,
            key: STORAGE_KEY.to_string(),
            location,
        })
    }
}

impl StorageAdapter for SqliteStorage {
    fn load(&self) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?", [&self.key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, document: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (&self.key, document),
        )?;
        debug!(location = %self.location, key = %self.key, bytes = document.len(), "wrote ledger document");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("sqlite:{}#{}", self.location, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_in_memory_round_trip() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        assert!(storage.load().unwrap().is_none());
        storage.save("[]").unwrap();
        storage.save("[1]").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_persists_across_opens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("spendy.db");
        {
            let mut storage = SqliteStorage::open(&path).unwrap();
            storage.save("[\"kept\"]").unwrap();
        }
        let storage = SqliteStorage::open(&path).unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[\"kept\"]"));
    }

    #[test]
    fn test_keys_do_not_collide() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("spendy.db");
        let mut a = SqliteStorage::open(&path).unwrap();
        a.save("a").unwrap();
        let b = SqliteStorage::open(&path).unwrap().with_key("other");
        assert!(b.load().unwrap().is_none());
    }
}
