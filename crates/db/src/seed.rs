//! Built-in demo data: five projects with their milestones, alerts, and
//! tenders.

use crate::dataset::Dataset;
use crate::error::DbError;

/// The demo dataset as a JSON document, in the [`Dataset`] wire format.
pub const DEMO_JSON: &str = include_str!("../seed/demo.json");

/// Parse the bundled demo dataset.
pub fn demo_dataset() -> Result<Dataset, DbError> {
    Dataset::from_json_str(DEMO_JSON)
}
