//! Project alert records.

use serde::{Deserialize, Serialize};

use crate::status::{AlertSeverity, AlertType};
use crate::types::{EntityId, Timestamp};

/// A notification linked to a project, carrying severity and read-state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: EntityId,
    pub project_id: EntityId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// Order alerts newest first by `created_at`.
///
/// Stable: alerts with identical timestamps keep their relative order, so
/// applying this twice yields the same sequence.
pub fn sort_newest_first(mut alerts: Vec<&Alert>) -> Vec<&Alert> {
    alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: &str, created_at: &str) -> Alert {
        Alert {
            id: id.into(),
            project_id: "proj-001".into(),
            title: id.into(),
            description: String::new(),
            alert_type: AlertType::General,
            severity: AlertSeverity::Low,
            is_read: false,
            created_at: created_at.parse().unwrap(),
        }
    }

    #[test]
    fn newest_alert_comes_first() {
        let older = alert("older", "2025-05-18T14:45:00");
        let newer = alert("newer", "2025-05-21T11:20:00");

        let sorted = sort_newest_first(vec![&older, &newer]);

        assert_eq!(sorted[0].id, "newer");
        assert_eq!(sorted[1].id, "older");
    }

    #[test]
    fn sorting_twice_is_stable() {
        let a = alert("a", "2025-05-20T09:30:00");
        let b = alert("b", "2025-05-20T09:30:00");
        let c = alert("c", "2025-05-21T08:45:00");

        let once = sort_newest_first(vec![&a, &b, &c]);
        let twice = sort_newest_first(once.clone());

        assert_eq!(once, twice);
        assert_eq!(once[1].id, "a");
    }

    #[test]
    fn type_field_uses_reserved_name_on_the_wire() {
        let json = r#"{
            "id": "alert-001",
            "projectId": "proj-002",
            "title": "Structural Issue Detected",
            "description": "Corrosion found",
            "type": "delay",
            "severity": "high",
            "isRead": false,
            "createdAt": "2025-05-20T09:30:00"
        }"#;
        let parsed: Alert = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.alert_type, AlertType::Delay);
        assert_eq!(parsed.severity, AlertSeverity::High);
        assert!(!parsed.is_read);
    }
}
