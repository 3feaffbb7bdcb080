//! Core domain types for the flowclean retention tools.
//!
//! Shared by the HTTP clients, the sweep loop, and the binaries:
//! run identifiers and timestamps, the flow-run lifecycle state enum,
//! retention-window arithmetic, and the sweep filter predicate.

pub mod error;
pub mod retention;
pub mod state;
pub mod types;
