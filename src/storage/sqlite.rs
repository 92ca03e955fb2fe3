//! SQLite state store implementation

use super::StateStore;
use crate::config::StorageConfig;
use crate::Result;
use chrono::{DateTime, TimeZone, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// SQLite-backed key-value store
pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open or create the state database described by `config`
    pub fn open(config: &StorageConfig) -> Result<Self> {
        // Create parent directory if needed
        if let Some(parent) = config.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        tracing::info!(path = %config.path.display(), "Opening state database");

        let conn = Connection::open(&config.path)?;

        if config.wal_mode {
            conn.pragma_update(None, "journal_mode", &"WAL")?;
        }

        let store = Self {
            conn,
            path: Some(config.path.clone()),
        };
        store.init_schema()?;

        Ok(store)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
            path: None,
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    /// Store statistics
    pub fn stats(&self) -> Result<StoreStats> {
        let key_count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))?;

        let last_update: Option<i64> = self
            .conn
            .query_row("SELECT MAX(updated_at) FROM kv_store", [], |row| row.get(0))?;

        Ok(StoreStats {
            key_count: key_count as usize,
            last_update: last_update.and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        })
    }

    /// Database file path, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl StateStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        tracing::debug!(key, bytes = value.len(), "Writing state");

        self.conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?, ?, ?)",
            params![key, value, Utc::now().timestamp_millis()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        tracing::debug!(key, "Removing state");

        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?", params![key])?;
        Ok(())
    }
}

/// State database statistics
#[derive(Debug)]
pub struct StoreStats {
    pub key_count: usize,
    pub last_update: Option<DateTime<Utc>>,
}
