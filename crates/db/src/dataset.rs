//! The immutable record collections every repository reads from.

use std::collections::HashSet;
use std::path::Path;

use civitrack_core::alert::Alert;
use civitrack_core::milestone::Milestone;
use civitrack_core::project::Project;
use civitrack_core::tender::Tender;
use serde::{Deserialize, Serialize};

use crate::error::DbError;

/// All records for one session, in storage order.
///
/// Fields are private: once built, a dataset can only be read. Share it
/// across threads behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    projects: Vec<Project>,
    milestones: Vec<Milestone>,
    alerts: Vec<Alert>,
    tenders: Vec<Tender>,
}

/// A foreign key that does not resolve to an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// Kind of the record holding the reference (`"milestone"`, `"bid"`, ...).
    pub entity: &'static str,
    pub id: String,
    /// Name of the foreign-key field.
    pub field: &'static str,
    /// The unresolved value.
    pub target: String,
}

impl Dataset {
    pub fn new(
        projects: Vec<Project>,
        milestones: Vec<Milestone>,
        alerts: Vec<Alert>,
        tenders: Vec<Tender>,
    ) -> Self {
        Self {
            projects,
            milestones,
            alerts,
            tenders,
        }
    }

    /// Parse a `{ projects, milestones, alerts, tenders }` JSON document.
    /// Missing collections are treated as empty.
    pub fn from_json_str(json: &str) -> Result<Self, DbError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dataset document from disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, DbError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DbError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dataset = Self::from_json_str(&json)?;
        dataset.log_summary(&path.display().to_string());
        Ok(dataset)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn tenders(&self) -> &[Tender] {
        &self.tenders
    }

    /// Every `projectId` / `tenderId` that does not resolve.
    ///
    /// Diagnostic only: queries over a dataset with dangling references
    /// still succeed and simply find nothing for the missing parent.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let project_ids: HashSet<&str> = self.projects.iter().map(|p| p.id.as_str()).collect();
        let mut dangling = Vec::new();

        let mut check = |entity: &'static str, id: &str, field: &'static str, target: &str, ok: bool| {
            if !ok {
                dangling.push(DanglingReference {
                    entity,
                    id: id.to_string(),
                    field,
                    target: target.to_string(),
                });
            }
        };

        for m in &self.milestones {
            let ok = project_ids.contains(m.project_id.as_str());
            check("milestone", &m.id, "projectId", &m.project_id, ok);
        }
        for a in &self.alerts {
            let ok = project_ids.contains(a.project_id.as_str());
            check("alert", &a.id, "projectId", &a.project_id, ok);
        }
        for t in &self.tenders {
            let ok = project_ids.contains(t.project_id.as_str());
            check("tender", &t.id, "projectId", &t.project_id, ok);
            for b in &t.bids {
                check("bid", &b.id, "tenderId", &b.tender_id, b.tender_id == t.id);
            }
        }

        dangling
    }

    /// Log record counts and any dangling references.
    pub fn log_summary(&self, source: &str) {
        tracing::info!(
            source,
            projects = self.projects.len(),
            milestones = self.milestones.len(),
            alerts = self.alerts.len(),
            tenders = self.tenders.len(),
            "Dataset loaded"
        );
        for r in self.dangling_references() {
            tracing::warn!(
                entity = r.entity,
                id = %r.id,
                field = r.field,
                target = %r.target,
                "Dangling reference in dataset"
            );
        }
    }
}
