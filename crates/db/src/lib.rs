//! In-memory query layer over an immutable civitrack dataset.
//!
//! A [`Dataset`] is constructed once (from seed data or a JSON document) and
//! handed to the repositories by reference. There is no global state and no
//! mutation: every repository call is a synchronous read.

pub mod dataset;
pub mod error;
pub mod repositories;
pub mod seed;

pub use dataset::{DanglingReference, Dataset};
pub use error::DbError;
