//! Repository for tenders and their bids.

use civitrack_core::filters::{TenderFilter, TenderTabCounts};
use civitrack_core::tender::Tender;

use crate::dataset::Dataset;

/// Provides read access to tenders.
pub struct TenderRepo;

impl TenderRepo {
    /// First tender whose id equals `id`.
    pub fn find_by_id<'a>(dataset: &'a Dataset, id: &str) -> Option<&'a Tender> {
        dataset.tenders().iter().find(|t| t.id == id)
    }

    /// Tenders of one project in storage order.
    pub fn list_by_project<'a>(dataset: &'a Dataset, project_id: &str) -> Vec<&'a Tender> {
        dataset
            .tenders()
            .iter()
            .filter(|t| t.project_id == project_id)
            .collect()
    }

    /// Tenders open for bidding (status `published`).
    pub fn list_active(dataset: &Dataset) -> Vec<&Tender> {
        dataset.tenders().iter().filter(|t| t.is_open()).collect()
    }

    /// Tenders matching `filter`, in storage order.
    pub fn list_filtered<'a>(dataset: &'a Dataset, filter: &TenderFilter) -> Vec<&'a Tender> {
        dataset
            .tenders()
            .iter()
            .filter(|t| filter.matches(t))
            .collect()
    }

    /// Per-tab counts over the whole collection, independent of any filter.
    pub fn tab_counts(dataset: &Dataset) -> TenderTabCounts {
        TenderTabCounts::count(dataset.tenders())
    }
}
