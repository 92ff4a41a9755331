//! Idempotent schema migrations for the hourbank database.
//! Every entry point that touches the database goes through
//! [`run_pending_migrations`] first, so the schema is guaranteed without a
//! separate setup step.

use rusqlite::{Connection, OptionalExtension, Result};

use crate::store::RECORDS_KEY;
use crate::ui::messages::warning;

/// Key used by pre-0.3 builds for the record sequence.
const LEGACY_RECORDS_KEY: &str = "@employee_data";

/// Ensure that the `kv` table exists.
/// One row per key; the record sequence lives under a single key.
fn ensure_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Older builds stored the record sequence under `@employee_data`.
/// Move it to the current key, unless the current key already holds data.
fn migrate_legacy_records_key(conn: &Connection) -> Result<()> {
    let legacy: Option<String> = conn
        .query_row(
            "SELECT value FROM kv WHERE key = ?1",
            [LEGACY_RECORDS_KEY],
            |row| row.get(0),
        )
        .optional()?;

    let Some(value) = legacy else {
        return Ok(());
    };

    let current_exists: Option<String> = conn
        .query_row(
            "SELECT value FROM kv WHERE key = ?1",
            [RECORDS_KEY],
            |row| row.get(0),
        )
        .optional()?;

    if current_exists.is_none() {
        warning("Migrating record data from the legacy storage key...");
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)",
            [RECORDS_KEY, value.as_str()],
        )?;
    }

    // The legacy key is dropped either way; the newer contents win.
    conn.execute("DELETE FROM kv WHERE key = ?1", [LEGACY_RECORDS_KEY])?;
    Ok(())
}

/// Run all pending migrations. Safe to call on every startup.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_kv_table(conn)?;
    ensure_log_table(conn)?;
    migrate_legacy_records_key(conn)?;
    Ok(())
}
