//! SQLite-backed state store.
//!
//! # Responsibility
//! - Persist the serialized catalog under one well-known key.
//! - Verify connection readiness before accepting work.
//!
//! # Invariants
//! - The persisted payload is one JSON document in `app_state.value`.
//! - `try_new` rejects unmigrated connections instead of failing later.

use crate::db::migrations::latest_version;
use crate::model::catalog::CatalogState;
use crate::store::{StateStore, StoreError, StoreResult, STATE_KEY};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

const REQUIRED_COLUMNS: [&str; 3] = ["key", "value", "updated_at"];

/// Key/value state store over a migrated SQLite connection.
pub struct SqliteStateStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateStore<'conn> {
    /// Constructs a store from a migrated, ready connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl StateStore for SqliteStateStore<'_> {
    fn load(&self) -> StoreResult<Option<CatalogState>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1;",
                [STATE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        let state = serde_json::from_str(&payload)
            .map_err(|err| StoreError::Corrupt(format!("undecodable catalog payload: {err}")))?;
        Ok(Some(state))
    }

    fn save(&self, state: &CatalogState) -> StoreResult<()> {
        let payload = serde_json::to_string(state)
            .map_err(|err| StoreError::Corrupt(format!("unencodable catalog state: {err}")))?;

        self.conn.execute(
            "INSERT INTO app_state (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![STATE_KEY, payload],
        )?;

        debug!(
            "event=state_save module=store status=ok bytes={}",
            payload.len()
        );
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version < expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: bool = conn.query_row(
        "SELECT EXISTS (
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'app_state'
         );",
        [],
        |row| row.get(0),
    )?;
    if !table_exists {
        return Err(StoreError::MissingRequiredTable("app_state"));
    }

    for column in REQUIRED_COLUMNS {
        let column_exists: bool = conn.query_row(
            "SELECT EXISTS (
                SELECT 1 FROM pragma_table_info('app_state') WHERE name = ?1
             );",
            [column],
            |row| row.get(0),
        )?;
        if !column_exists {
            return Err(StoreError::MissingRequiredColumn {
                table: "app_state",
                column,
            });
        }
    }

    Ok(())
}
