//! Catalog domain model for characters, furniture and their photos.
//!
//! # Responsibility
//! - Define the canonical records shared by store, wall and flow layers.
//! - Keep the persisted wire shape compatible with the mobile app state.
//!
//! # Invariants
//! - Every record is identified by a stable opaque string id.
//! - Photos are owned by exactly one entity and never mutated in place.

pub mod catalog;
pub mod seed;
