//! Milestone records and timeline ordering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::MilestoneStatus;
use crate::types::EntityId;

/// A dated checkpoint within a project's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: EntityId,
    pub project_id: EntityId,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub status: MilestoneStatus,
}

/// Order milestones for a timeline: ascending by date.
///
/// The sort is stable, so milestones sharing a date keep their storage order.
pub fn sort_by_date(mut milestones: Vec<&Milestone>) -> Vec<&Milestone> {
    milestones.sort_by_key(|m| m.date);
    milestones
}
