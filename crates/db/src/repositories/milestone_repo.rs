//! Repository for milestones.

use civitrack_core::milestone::Milestone;

use crate::dataset::Dataset;

/// Provides read access to milestones.
pub struct MilestoneRepo;

impl MilestoneRepo {
    /// Milestones of one project in storage order (not date-sorted; see
    /// [`civitrack_core::milestone::sort_by_date`]).
    pub fn list_by_project<'a>(dataset: &'a Dataset, project_id: &str) -> Vec<&'a Milestone> {
        dataset
            .milestones()
            .iter()
            .filter(|m| m.project_id == project_id)
            .collect()
    }
}
