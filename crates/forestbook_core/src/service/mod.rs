//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate in-memory state and persistence above the store seam.
//!
//! # Invariants
//! - Services never bypass the `StateStore` contract for persistence.

pub mod catalog_service;
