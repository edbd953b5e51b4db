//! Categorical color tokens for statuses and severities.
//!
//! Enum-typed mappings are exhaustive. The string-typed entry points accept
//! raw values and fall back to [`ColorToken::Neutral`] for anything unmapped.

use serde::{Deserialize, Serialize};

use crate::status::{AlertSeverity, MilestoneStatus, ProjectStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Green,
    Blue,
    Amber,
    Red,
    Neutral,
}

impl ColorToken {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Amber => "amber",
            Self::Red => "red",
            Self::Neutral => "neutral",
        }
    }
}

// ---------------------------------------------------------------------------
// Typed mappings
// ---------------------------------------------------------------------------

pub fn project_status_color(status: ProjectStatus) -> ColorToken {
    match status {
        ProjectStatus::Active | ProjectStatus::Completed => ColorToken::Green,
        ProjectStatus::Planning => ColorToken::Blue,
        ProjectStatus::Delayed => ColorToken::Amber,
    }
}

pub fn milestone_color(status: MilestoneStatus) -> ColorToken {
    match status {
        MilestoneStatus::Completed => ColorToken::Green,
        MilestoneStatus::Pending => ColorToken::Blue,
        MilestoneStatus::Delayed => ColorToken::Amber,
    }
}

pub fn severity_color(severity: AlertSeverity) -> ColorToken {
    match severity {
        AlertSeverity::Low => ColorToken::Blue,
        AlertSeverity::Medium => ColorToken::Amber,
        AlertSeverity::High => ColorToken::Red,
    }
}

// ---------------------------------------------------------------------------
// Raw string entry points
// ---------------------------------------------------------------------------

/// Color for a raw project status value.
pub fn status_color(status: &str) -> ColorToken {
    ProjectStatus::from_str_value(status)
        .map(project_status_color)
        .unwrap_or(ColorToken::Neutral)
}

/// Color for a raw milestone status value.
pub fn milestone_status_color(status: &str) -> ColorToken {
    MilestoneStatus::from_str_value(status)
        .map(milestone_color)
        .unwrap_or(ColorToken::Neutral)
}

/// Color for a raw alert severity value.
pub fn alert_severity_color(severity: &str) -> ColorToken {
    AlertSeverity::from_str_value(severity)
        .map(severity_color)
        .unwrap_or(ColorToken::Neutral)
}
