//! Flutter-facing FFI crate for the Forestbook core.

pub mod api;
