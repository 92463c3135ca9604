use crate::errors::{AppError, AppResult};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

pub const COMPANIES_KEY: &str = "crm-companies";
pub const CONTACTS_KEY: &str = "crm-contacts";
pub const TASKS_KEY: &str = "crm-tasks";

/// Whole-snapshot persistence keyed by collection name. Every save replaces
/// the prior snapshot in full; there are no partial writes and no schema
/// migration. A changed record shape is the caller's responsibility.
pub trait SnapshotStore {
    /// Returns the snapshot stored under `key`, or `default` when nothing is
    /// stored yet or the stored value no longer parses. A corrupt snapshot is
    /// treated as absent rather than surfaced as an error.
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> AppResult<T>;

    fn save<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()>;
}

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS snapshots (
  key TEXT PRIMARY KEY,
  value_json TEXT NOT NULL,
  updated_at TEXT NOT NULL
);";

#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new(path: &Path) -> AppResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| AppError::Io(err.to_string()))?;
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| AppError::Internal("store mutex poisoned".to_string()))
    }
}

impl SnapshotStore for SqliteStore {
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> AppResult<T> {
        let conn = self.lock()?;
        let raw = conn
            .query_row(
                "SELECT value_json FROM snapshots WHERE key = ?1",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        match raw {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(error) => {
                    warn!(key, %error, "discarding unreadable snapshot");
                    Ok(default)
                }
            },
            None => Ok(default),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let value_json = serde_json::to_string(value)?;
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO snapshots (key, value_json, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value_json = excluded.value_json, updated_at = excluded.updated_at",
            params![key, value_json, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

/// Map-backed store for tests and embedders without a data directory. Clones
/// share the same underlying entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::Internal("store mutex poisoned".to_string()))
    }
}

impl SnapshotStore for MemoryStore {
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> AppResult<T> {
        let entries = self.lock()?;
        match entries.get(key) {
            Some(raw) => match serde_json::from_str(raw) {
                Ok(value) => Ok(value),
                Err(error) => {
                    warn!(key, %error, "discarding unreadable snapshot");
                    Ok(default)
                }
            },
            None => Ok(default),
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let value_json = serde_json::to_string(value)?;
        let mut entries = self.lock()?;
        entries.insert(key.to_string(), value_json);
        Ok(())
    }
}
