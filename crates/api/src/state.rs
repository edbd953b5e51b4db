use std::sync::Arc;

use civitrack_db::Dataset;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the dataset sits behind an `Arc` and is never mutated.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
