//! Repository for projects.

use civitrack_core::filters::ProjectFilter;
use civitrack_core::project::Project;

use crate::dataset::Dataset;

/// Provides read access to projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// First project whose id equals `id`.
    pub fn find_by_id<'a>(dataset: &'a Dataset, id: &str) -> Option<&'a Project> {
        dataset.projects().iter().find(|p| p.id == id)
    }

    /// All projects in storage order.
    pub fn list(dataset: &Dataset) -> &[Project] {
        dataset.projects()
    }

    /// Projects with status `active`.
    pub fn list_active(dataset: &Dataset) -> Vec<&Project> {
        dataset.projects().iter().filter(|p| p.is_active()).collect()
    }

    /// Projects matching every predicate in `filter`, in storage order.
    pub fn list_filtered<'a>(dataset: &'a Dataset, filter: &ProjectFilter) -> Vec<&'a Project> {
        dataset
            .projects()
            .iter()
            .filter(|p| filter.matches(p))
            .collect()
    }
}
