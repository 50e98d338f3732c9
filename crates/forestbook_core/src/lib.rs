//! Core domain logic for Forestbook.
//! This crate is the single source of truth for business invariants.

pub mod capture;
pub mod db;
pub mod flow;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod wall;

pub use capture::{
    capture_photo_into, CaptureError, CaptureFlowOutcome, CaptureOutcome, CaptureSpi,
};
pub use flow::{DeleteFlow, DeleteFlowError, DeleteFlowState};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{
    CatalogState, Character, Furniture, NewCharacter, NewFurniture, OwnerKind, PhotoItem,
    PhotoOwner,
};
pub use model::seed::default_catalog_state;
pub use service::catalog_service::{CatalogService, LoadSource};
pub use store::{SqliteStateStore, StateStore, StoreError, StoreResult, STATE_KEY};
pub use wall::{build_photo_wall, PhotoWallEntry, WallMode};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
