//! Budget and schedule progress derived from a single project.
//!
//! Percentages are whole numbers rounded half away from zero. Calendar dates
//! are taken at UTC midnight. Every time-dependent function has an `_at`
//! variant taking an explicit `now`; the plain variant reads the system clock.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use crate::color::{project_status_color, ColorToken};
use crate::project::Project;
use crate::status::ProjectStatus;
use crate::types::Amount;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Weight of schedule progress in the blended project progress.
pub const SCHEDULE_WEIGHT: f64 = 0.6;

/// Weight of budget progress in the blended project progress.
pub const BUDGET_WEIGHT: f64 = 0.4;

/// Percentage points spend may run ahead of schedule before a project is
/// flagged.
pub const SPEND_AHEAD_TOLERANCE: i64 = 15;

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

/// Spend-to-budget ratio as a percentage.
///
/// Not clamped: a project spending past its budget reports more than 100.
/// A zero budget reports 0.
///
/// # Examples
///
/// ```
/// # use civitrack_core::progress::calculate_progress_percentage;
/// # use civitrack_core::project::{Location, Project};
/// # use civitrack_core::status::ProjectStatus;
/// # use chrono::NaiveDate;
/// let project = Project {
///     id: "proj-001".into(),
///     name: "Downtown Transit Hub".into(),
///     description: String::new(),
///     status: ProjectStatus::Active,
///     budget: 12_500_000.0,
///     current_spend: 4_750_000.0,
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 7, 30).unwrap(),
///     location: Location { lat: 0.0, lng: 0.0, address: String::new() },
/// };
/// assert_eq!(calculate_progress_percentage(&project), 38);
/// ```
pub fn calculate_progress_percentage(project: &Project) -> i64 {
    percentage(project.current_spend, project.budget)
}

/// `budget - current_spend`. Negative once the project is over budget.
pub fn remaining_budget(project: &Project) -> Amount {
    project.budget - project.current_spend
}

/// `round(part / whole * 100)`, or 0 when `whole` is zero.
pub fn percentage(part: Amount, whole: Amount) -> i64 {
    if whole == 0.0 {
        return 0;
    }
    round_percent(part / whole * 100.0)
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// Elapsed share of the project's schedule at `now`, in `0..=100`.
///
/// 0 before `start_date`, 100 after `end_date`, linear in between. A
/// zero-length schedule reports 100 once reached.
pub fn calculate_time_progress_at(project: &Project, now: DateTime<Utc>) -> i64 {
    let start = start_of_day(project.start_date);
    let end = start_of_day(project.end_date);

    if now < start {
        return 0;
    }
    if now > end {
        return 100;
    }

    let total = (end - start).num_milliseconds();
    if total <= 0 {
        return 100;
    }
    let elapsed = (now - start).num_milliseconds();
    round_percent(elapsed as f64 / total as f64 * 100.0)
}

pub fn calculate_time_progress(project: &Project) -> i64 {
    calculate_time_progress_at(project, Utc::now())
}

// ---------------------------------------------------------------------------
// Blended progress and flags
// ---------------------------------------------------------------------------

/// Overall progress: 100 for completed projects, otherwise a blend weighted
/// toward schedule. Not clamped, so heavy overspend can push it past 100.
pub fn get_project_progress_at(project: &Project, now: DateTime<Utc>) -> i64 {
    if project.status == ProjectStatus::Completed {
        return 100;
    }
    let time = calculate_time_progress_at(project, now) as f64;
    let budget = calculate_progress_percentage(project) as f64;
    round_percent(time * SCHEDULE_WEIGHT + budget * BUDGET_WEIGHT)
}

pub fn get_project_progress(project: &Project) -> i64 {
    get_project_progress_at(project, Utc::now())
}

pub fn is_project_behind_schedule_at(project: &Project, now: DateTime<Utc>) -> bool {
    spend_outpaces_schedule(project, now)
}

pub fn is_project_behind_schedule(project: &Project) -> bool {
    is_project_behind_schedule_at(project, Utc::now())
}

// Shares the behind-schedule formula; it does not compare spend against
// budget alone.
pub fn is_project_over_budget_at(project: &Project, now: DateTime<Utc>) -> bool {
    spend_outpaces_schedule(project, now)
}

pub fn is_project_over_budget(project: &Project) -> bool {
    is_project_over_budget_at(project, Utc::now())
}

fn spend_outpaces_schedule(project: &Project, now: DateTime<Utc>) -> bool {
    let time = calculate_time_progress_at(project, now);
    let budget = calculate_progress_percentage(project);
    budget > time + SPEND_AHEAD_TOLERANCE
}

// ---------------------------------------------------------------------------
// Metrics bundle
// ---------------------------------------------------------------------------

/// Every per-project derivation, computed against one `now`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetrics {
    pub budget_progress: i64,
    pub time_progress: i64,
    pub overall_progress: i64,
    pub behind_schedule: bool,
    pub over_budget: bool,
    pub remaining_budget: Amount,
    pub status_color: ColorToken,
}

impl ProjectMetrics {
    pub fn compute_at(project: &Project, now: DateTime<Utc>) -> Self {
        Self {
            budget_progress: calculate_progress_percentage(project),
            time_progress: calculate_time_progress_at(project, now),
            overall_progress: get_project_progress_at(project, now),
            behind_schedule: is_project_behind_schedule_at(project, now),
            over_budget: is_project_over_budget_at(project, now),
            remaining_budget: remaining_budget(project),
            status_color: project_status_color(project.status),
        }
    }

    pub fn compute(project: &Project) -> Self {
        Self::compute_at(project, Utc::now())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

fn round_percent(value: f64) -> i64 {
    value.round() as i64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
