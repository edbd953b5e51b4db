//! Portfolio-level figures for the dashboard overview.
//!
//! Computed from whole collections passed in by the caller; the `core`
//! crate never holds the dataset itself.

use serde::Serialize;

use crate::alert::Alert;
use crate::progress::percentage;
use crate::project::Project;
use crate::tender::Tender;
use crate::types::Amount;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub active_projects: usize,
    pub active_tenders: usize,
    pub unread_alerts: usize,
    pub total_budget: Amount,
    pub total_spent: Amount,
    pub remaining_funds: Amount,
    /// `round(total_spent / total_budget * 100)`, 0 for an empty portfolio.
    pub budget_used_percent: i64,
}

impl DashboardSummary {
    pub fn compute(projects: &[Project], alerts: &[Alert], tenders: &[Tender]) -> Self {
        let total_budget: Amount = projects.iter().map(|p| p.budget).sum();
        let total_spent: Amount = projects.iter().map(|p| p.current_spend).sum();

        Self {
            active_projects: projects.iter().filter(|p| p.is_active()).count(),
            active_tenders: tenders.iter().filter(|t| t.is_open()).count(),
            unread_alerts: alerts.iter().filter(|a| !a.is_read).count(),
            total_budget,
            total_spent,
            remaining_funds: total_budget - total_spent,
            budget_used_percent: percentage(total_spent, total_budget),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::project::Location;
    use crate::status::{AlertSeverity, AlertType, ProjectStatus, TenderStatus};

    fn project(status: ProjectStatus, budget: f64, spend: f64) -> Project {
        Project {
            id: format!("proj-{budget}"),
            name: "P".into(),
            description: String::new(),
            status,
            budget,
            current_spend: spend,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            location: Location {
                lat: 0.0,
                lng: 0.0,
                address: String::new(),
            },
        }
    }

    fn alert(is_read: bool) -> Alert {
        Alert {
            id: "alert".into(),
            project_id: "proj".into(),
            title: String::new(),
            description: String::new(),
            alert_type: AlertType::General,
            severity: AlertSeverity::Low,
            is_read,
            created_at: "2025-05-20T09:30:00".parse().unwrap(),
        }
    }

    fn tender(status: TenderStatus) -> Tender {
        Tender {
            id: "tender".into(),
            project_id: "proj".into(),
            title: String::new(),
            description: String::new(),
            budget: 0.0,
            requirements_summary: String::new(),
            deadline: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            status,
            created_at: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            bids: Vec::new(),
        }
    }

    #[test]
    fn totals_and_counts() {
        let projects = [
            project(ProjectStatus::Active, 300.0, 100.0),
            project(ProjectStatus::Planning, 100.0, 50.0),
            project(ProjectStatus::Active, 600.0, 50.0),
        ];
        let alerts = [alert(false), alert(true), alert(false)];
        let tenders = [tender(TenderStatus::Published), tender(TenderStatus::Awarded)];

        let summary = DashboardSummary::compute(&projects, &alerts, &tenders);

        assert_eq!(summary.active_projects, 2);
        assert_eq!(summary.active_tenders, 1);
        assert_eq!(summary.unread_alerts, 2);
        assert_eq!(summary.total_budget, 1000.0);
        assert_eq!(summary.total_spent, 200.0);
        assert_eq!(summary.remaining_funds, 800.0);
        assert_eq!(summary.budget_used_percent, 20);
    }

    #[test]
    fn empty_portfolio_is_all_zero() {
        let summary = DashboardSummary::compute(&[], &[], &[]);
        assert_eq!(summary.total_budget, 0.0);
        assert_eq!(summary.budget_used_percent, 0);
    }
}
