//! List-screen filter predicates.
//!
//! A filter is a logical AND of independent predicates. Every predicate has a
//! pass-through value (`"all"` for categories, `""` for text), and no
//! predicate ever errors: an unrecognised category value simply matches
//! nothing.

use std::str::FromStr;

use crate::alert::Alert;
use crate::project::Project;
use crate::status::{AlertSeverity, AlertType, ProjectStatus, TenderStatus};
use crate::tender::Tender;

/// Raw value that disables a categorical filter.
pub const ALL: &str = "all";

// ---------------------------------------------------------------------------
// Predicate building blocks
// ---------------------------------------------------------------------------

/// Equality filter over a categorical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// No restriction.
    All,
    /// Field must equal this value.
    Only(T),
    /// A value outside the enumeration. Matches no record.
    Unknown(String),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: Copy + PartialEq + FromStr> Selection<T> {
    /// `"all"` and `""` select everything; anything else must parse as `T`.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL {
            return Self::All;
        }
        match raw.parse::<T>() {
            Ok(value) => Self::Only(value),
            Err(_) => Self::Unknown(raw.to_string()),
        }
    }

    /// Parse an optional query value; `None` selects everything.
    pub fn parse_opt(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub fn matches(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == value,
            Self::Unknown(_) => false,
        }
    }
}

/// Read-state filter for alerts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadFilter {
    #[default]
    All,
    Read,
    Unread,
}

impl ReadFilter {
    /// `"read"` and `"unread"` restrict; every other value leaves it open.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "read" => Self::Read,
            "unread" => Self::Unread,
            _ => Self::All,
        }
    }

    pub fn matches(self, is_read: bool) -> bool {
        match self {
            Self::All => true,
            Self::Read => is_read,
            Self::Unread => !is_read,
        }
    }
}

/// Procurement tabs. Closed groups both closed and awarded tenders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TenderTab {
    #[default]
    All,
    Open,
    Closed,
    Draft,
}

impl TenderTab {
    /// Unknown tab names leave the list unrestricted.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "open" => Self::Open,
            "closed" => Self::Closed,
            "draft" => Self::Draft,
            _ => Self::All,
        }
    }

    pub fn matches(self, status: TenderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Open => status == TenderStatus::Published,
            Self::Closed => matches!(status, TenderStatus::Closed | TenderStatus::Awarded),
            Self::Draft => status == TenderStatus::Draft,
        }
    }
}

/// Case-insensitive substring match of `search` against any of `fields`.
///
/// An empty search matches everything. Whitespace is significant.
pub fn text_matches(search: &str, fields: &[&str]) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

// ---------------------------------------------------------------------------
// Per-screen filters
// ---------------------------------------------------------------------------

/// Projects list: status plus a search over the project name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub status: Selection<ProjectStatus>,
    pub search: String,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        self.status.matches(project.status) && text_matches(&self.search, &[project.name.as_str()])
    }
}

/// Alerts list: search over title and description, severity, type, read-state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertFilter {
    pub search: String,
    pub severity: Selection<AlertSeverity>,
    pub alert_type: Selection<AlertType>,
    pub read: ReadFilter,
}

impl AlertFilter {
    pub fn matches(&self, alert: &Alert) -> bool {
        text_matches(&self.search, &[alert.title.as_str(), alert.description.as_str()])
            && self.severity.matches(alert.severity)
            && self.alert_type.matches(alert.alert_type)
            && self.read.matches(alert.is_read)
    }
}

/// Procurement list: tab, status, and search over title and description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TenderFilter {
    pub tab: TenderTab,
    pub status: Selection<TenderStatus>,
    pub search: String,
}

impl TenderFilter {
    pub fn matches(&self, tender: &Tender) -> bool {
        self.tab.matches(tender.status)
            && self.status.matches(tender.status)
            && text_matches(&self.search, &[tender.title.as_str(), tender.description.as_str()])
    }
}

/// Tender counts shown on the procurement tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct TenderTabCounts {
    pub open: usize,
    pub closed: usize,
    pub draft: usize,
}

impl TenderTabCounts {
    pub fn count<'a>(tenders: impl IntoIterator<Item = &'a Tender>) -> Self {
        let mut counts = Self::default();
        for tender in tenders {
            if TenderTab::Open.matches(tender.status) {
                counts.open += 1;
            } else if TenderTab::Closed.matches(tender.status) {
                counts.closed += 1;
            } else if TenderTab::Draft.matches(tender.status) {
                counts.draft += 1;
            }
        }
        counts
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
