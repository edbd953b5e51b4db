//! Project records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::ProjectStatus;
use crate::types::{Amount, EntityId};

/// Where a project is sited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// A construction or infrastructure project.
///
/// `current_spend` may exceed `budget`; being over budget is a derived
/// condition, never a rejected state. `start_date <= end_date` is expected
/// but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub budget: Amount,
    pub current_spend: Amount,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: Location,
}

impl Project {
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}
