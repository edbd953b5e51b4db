//! Domain model and pure derivation logic for the civitrack dashboard.
//!
//! This crate has no I/O and no internal dependencies. Records are plain
//! values; every function here is synchronous and side-effect free so it
//! can back the repository layer, the HTTP surface, or any future tooling.

pub mod alert;
pub mod bid;
pub mod color;
pub mod dashboard;
pub mod error;
pub mod filters;
pub mod format;
pub mod milestone;
pub mod progress;
pub mod project;
pub mod status;
pub mod tender;
pub mod types;
