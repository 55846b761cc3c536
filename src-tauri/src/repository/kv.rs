//! Key-Value Store
//!
//! Opaque string-keyed persistence backend on SQLite. Synchronous by
//! design: a single actor mutates state, so every write completes before
//! the next user action is processed.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::{DomainError, DomainResult};

pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    /// Open (or create) a store at the given path
    pub fn open(path: &Path) -> DomainResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DomainError::Internal(format!("open store: {}", e)))?;
        Self::init(conn)
    }

    /// Create an in-memory store (for tests)
    pub fn open_in_memory() -> DomainResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DomainError::Internal(format!("open in-memory store: {}", e)))?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> DomainResult<Self> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             CREATE TABLE IF NOT EXISTS kv (
                 key TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );",
        )
        .map_err(|e| DomainError::Internal(format!("init schema: {}", e)))?;
        Ok(Self { conn })
    }

    pub fn get(&self, key: &str) -> DomainResult<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
            .map_err(|e| DomainError::Internal(format!("get {}: {}", key, e)))
    }

    pub fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map_err(|e| DomainError::Internal(format!("set {}: {}", key, e)))?;
        Ok(())
    }
}
