//! Query parameter types for list endpoints.
//!
//! Every parameter is optional and free-form; conversion into the core
//! filter types never fails. Absent values, `"all"`, and `""` leave the
//! corresponding predicate open.

use civitrack_core::filters::{
    AlertFilter, ProjectFilter, ReadFilter, Selection, TenderFilter, TenderTab,
};
use serde::Deserialize;

/// `GET /projects?status=&search=`
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub status: Option<String>,
    pub search: Option<String>,
}

impl ProjectListParams {
    pub fn to_filter(&self) -> ProjectFilter {
        ProjectFilter {
            status: Selection::parse_opt(self.status.as_deref()),
            search: self.search.clone().unwrap_or_default(),
        }
    }
}

/// `GET /alerts?search=&severity=&type=&read=`
#[derive(Debug, Default, Deserialize)]
pub struct AlertListParams {
    pub search: Option<String>,
    pub severity: Option<String>,
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
    /// `read`, `unread`, or anything else for both.
    pub read: Option<String>,
}

impl AlertListParams {
    pub fn to_filter(&self) -> AlertFilter {
        AlertFilter {
            search: self.search.clone().unwrap_or_default(),
            severity: Selection::parse_opt(self.severity.as_deref()),
            alert_type: Selection::parse_opt(self.alert_type.as_deref()),
            read: self
                .read
                .as_deref()
                .map(ReadFilter::parse)
                .unwrap_or_default(),
        }
    }
}

/// `GET /tenders?tab=&status=&search=`
#[derive(Debug, Default, Deserialize)]
pub struct TenderListParams {
    /// `open`, `closed`, `draft`, or anything else for every tab.
    pub tab: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl TenderListParams {
    pub fn to_filter(&self) -> TenderFilter {
        TenderFilter {
            tab: self.tab.as_deref().map(TenderTab::parse).unwrap_or_default(),
            status: Selection::parse_opt(self.status.as_deref()),
            search: self.search.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use civitrack_core::status::{AlertSeverity, TenderStatus};

    use super::*;

    #[test]
    fn empty_params_build_open_filters() {
        assert_eq!(ProjectListParams::default().to_filter(), ProjectFilter::default());
        assert_eq!(AlertListParams::default().to_filter(), AlertFilter::default());
        assert_eq!(TenderListParams::default().to_filter(), TenderFilter::default());
    }

    #[test]
    fn alert_params_map_each_field() {
        let params = AlertListParams {
            search: Some("delay".into()),
            severity: Some("high".into()),
            alert_type: Some("all".into()),
            read: Some("unread".into()),
        };
        let filter = params.to_filter();

        assert_eq!(filter.search, "delay");
        assert_eq!(filter.severity, Selection::Only(AlertSeverity::High));
        assert_eq!(filter.alert_type, Selection::All);
        assert_eq!(filter.read, ReadFilter::Unread);
    }

    #[test]
    fn tender_params_map_tab_and_status() {
        let params = TenderListParams {
            tab: Some("closed".into()),
            status: Some("awarded".into()),
            search: None,
        };
        let filter = params.to_filter();

        assert_eq!(filter.tab, TenderTab::Closed);
        assert_eq!(filter.status, Selection::Only(TenderStatus::Awarded));
    }
}
