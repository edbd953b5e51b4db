//! Read-only repositories, one per record type.
//!
//! Each repository is a zero-sized struct with associated functions taking
//! the [`Dataset`](crate::Dataset) explicitly. Lookups by id return
//! `Option`; list queries return borrowed records and an empty `Vec` when
//! nothing matches.

mod alert_repo;
mod milestone_repo;
mod project_repo;
mod tender_repo;

pub use alert_repo::AlertRepo;
pub use milestone_repo::MilestoneRepo;
pub use project_repo::ProjectRepo;
pub use tender_repo::TenderRepo;
