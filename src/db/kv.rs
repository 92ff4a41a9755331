//! The persistence collaborator: a key-value seam over the SQLite `kv`
//! table. Callers address it by key only; each key's contents belong to
//! exactly one owner.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use rusqlite::OptionalExtension;

pub trait KvStore {
    /// Read the value stored under `key`, if any.
    fn get(&mut self, key: &str) -> AppResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl KvStore for DbPool {
    fn get(&mut self, key: &str) -> AppResult<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| AppError::StorageRead(e.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                [key, value],
            )
            .map(|_| ())
            .map_err(|e| AppError::StorageWrite(e.to_string()))
    }
}

impl<K: KvStore + ?Sized> KvStore for &mut K {
    fn get(&mut self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}
