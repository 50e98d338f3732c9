//! State store contracts and persistence errors.
//!
//! # Responsibility
//! - Define the load/save contract over the serialized catalog state.
//! - Keep storage details behind the `StateStore` seam.
//!
//! # Invariants
//! - Both collections are one unit of persistence; there is no partial
//!   write.
//! - Corrupt persisted payloads surface as typed errors; recovery policy
//!   belongs to the caller.

use crate::db::DbError;
use crate::model::catalog::CatalogState;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod sqlite;

pub use sqlite::SqliteStateStore;

/// Well-known storage key holding the serialized catalog state.
pub const STATE_KEY: &str = "forest_catalog_v1";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence-layer error for catalog state load/save operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// A persisted payload exists but cannot be decoded.
    Corrupt(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing from the connection schema.
    MissingRequiredTable(&'static str),
    /// Required column is missing from a known table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt(message) => write!(f, "corrupt persisted state: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Load/save contract for the persisted catalog state.
pub trait StateStore {
    /// Loads the persisted state. `None` when nothing was stored yet.
    fn load(&self) -> StoreResult<Option<CatalogState>>;
    /// Persists the whole state, replacing any previous payload.
    fn save(&self, state: &CatalogState) -> StoreResult<()>;
}
