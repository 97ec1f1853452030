//! Database migrations

use rusqlite::Connection;

use crate::error::{CartwiseError, Result};

const MIGRATIONS: [&str; 2] = [
    // 1: cart lines and the singleton state row
    "CREATE TABLE IF NOT EXISTS cart_items (
         position     INTEGER PRIMARY KEY,
         product_id   TEXT NOT NULL UNIQUE,
         product_json TEXT NOT NULL,
         quantity     INTEGER NOT NULL CHECK (quantity >= 1),
         added_at     TEXT NOT NULL
     );
     CREATE TABLE IF NOT EXISTS cart_state (
         id       INTEGER PRIMARY KEY CHECK (id = 1),
         version  INTEGER NOT NULL,
         budget   REAL NOT NULL,
         saved_at TEXT NOT NULL
     );",
    // 2
    "CREATE INDEX IF NOT EXISTS idx_cart_items_added_at ON cart_items(added_at);",
];

#[allow(clippy::cast_possible_truncation)]
pub const SCHEMA_VERSION: u32 = MIGRATIONS.len() as u32;

/// Run all pending migrations on the database.
pub fn run_migrations(conn: &Connection) -> Result<u32> {
    let current_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;

    if current_version > SCHEMA_VERSION {
        return Err(CartwiseError::Storage(format!(
            "database schema {current_version} is newer than supported {SCHEMA_VERSION}"
        )));
    }

    for (idx, sql) in MIGRATIONS.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let target_version = (idx + 1) as u32;
        if current_version >= target_version {
            continue;
        }

        conn.execute_batch(sql).map_err(|err| {
            CartwiseError::Storage(format!("migration {target_version} failed: {err}"))
        })?;
        conn.pragma_update(None, "user_version", target_version)
            .map_err(|err| {
                CartwiseError::Storage(format!(
                    "failed to set user_version {target_version}: {err}"
                ))
            })?;
        tracing::debug!(version = target_version, "applied migration");
    }

    Ok(SCHEMA_VERSION)
}
