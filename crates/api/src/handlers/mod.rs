//! Request handlers for the dashboard resources.
//!
//! Handlers read from the shared [`Dataset`](civitrack_db::Dataset) through
//! the repositories in `civitrack_db`, attach derived figures from
//! `civitrack_core`, and map errors via [`AppError`](crate::error::AppError).
//! Records are cloned into the response; the dataset itself is never touched.

pub mod alert;
pub mod bid;
pub mod dashboard;
pub mod project;
pub mod tender;
