//! Repository for alerts.

use civitrack_core::alert::{sort_newest_first, Alert};
use civitrack_core::filters::AlertFilter;

use crate::dataset::Dataset;

/// Provides read access to alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// Alerts of one project in storage order.
    pub fn list_by_project<'a>(dataset: &'a Dataset, project_id: &str) -> Vec<&'a Alert> {
        dataset
            .alerts()
            .iter()
            .filter(|a| a.project_id == project_id)
            .collect()
    }

    /// Every alert, newest first. The dataset itself is left untouched.
    pub fn list_all(dataset: &Dataset) -> Vec<&Alert> {
        sort_newest_first(dataset.alerts().iter().collect())
    }

    /// Alerts matching `filter`, newest first.
    pub fn list_filtered<'a>(dataset: &'a Dataset, filter: &AlertFilter) -> Vec<&'a Alert> {
        Self::list_all(dataset)
            .into_iter()
            .filter(|a| filter.matches(a))
            .collect()
    }

    pub fn count_unread(dataset: &Dataset) -> usize {
        dataset.alerts().iter().filter(|a| !a.is_read).count()
    }
}
