//! SQLite-backed state store

use std::path::Path;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};

use super::{check_format_version, migrations, PersistedState, StateStore};
use crate::core::{CartItem, Product};
use crate::error::{CartwiseError, Result};

pub struct SqliteStore {
    conn: Mutex<Connection>,
    schema_version: u32,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("schema_version", &self.schema_version)
            .finish_non_exhaustive()
    }
}

impl SqliteStore {
    /// Open the database at the given path, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        Self::configure_pragmas(&conn)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let schema_version = migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            schema_version,
        })
    }

    /// Current schema version after migrations.
    #[must_use]
    pub const fn schema_version(&self) -> u32 {
        self.schema_version
    }

    pub fn integrity_check(&self) -> Result<bool> {
        let result: String = self
            .conn
            .lock()
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        Ok(result == "ok")
    }

    fn configure_pragmas(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA temp_store = MEMORY;",
        )?;
        Ok(())
    }
}

impl StateStore for SqliteStore {
    fn save(&self, state: &PersistedState) -> Result<()> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM cart_items", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO cart_items (position, product_id, product_json, quantity, added_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for (position, item) in state.cart.iter().enumerate() {
                #[allow(clippy::cast_possible_wrap)]
                let position = position as i64;
                insert.execute(params![
                    position,
                    item.product.id,
                    serde_json::to_string(&item.product)?,
                    item.quantity,
                    item.added_at.to_rfc3339(),
                ])?;
            }
        }
        tx.execute(
            "INSERT INTO cart_state (id, version, budget, saved_at) VALUES (1, ?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                 version = excluded.version,
                 budget = excluded.budget,
                 saved_at = excluded.saved_at",
            params![state.version, state.budget, state.saved_at.to_rfc3339()],
        )?;
        tx.commit()?;
        tracing::debug!(items = state.cart.len(), "saved cart to sqlite");
        Ok(())
    }

    fn load(&self) -> Result<Option<PersistedState>> {
        let conn = self.conn.lock();
        let header: Option<(u32, f64, String)> = conn
            .query_row(
                "SELECT version, budget, saved_at FROM cart_state WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;
        let Some((version, budget, saved_at)) = header else {
            return Ok(None);
        };
        check_format_version(version, "sqlite cart_state")?;

        let mut stmt = conn.prepare(
            "SELECT product_json, quantity, added_at FROM cart_items ORDER BY position",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, u32>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut cart = Vec::new();
        for row in rows {
            let (product_json, quantity, added_at) = row?;
            let product: Product = serde_json::from_str(&product_json)?;
            cart.push(CartItem {
                product,
                quantity,
                added_at: parse_timestamp(&added_at)?,
            });
        }

        Ok(Some(PersistedState {
            version,
            cart,
            budget,
            saved_at: parse_timestamp(&saved_at)?,
        }))
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| CartwiseError::Storage(format!("bad timestamp '{value}': {err}")))
}
