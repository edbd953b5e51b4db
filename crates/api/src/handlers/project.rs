//! Handlers for the `/projects` resource.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use civitrack_core::alert::Alert;
use civitrack_core::milestone::{sort_by_date, Milestone};
use civitrack_core::progress::ProjectMetrics;
use civitrack_core::project::Project;
use civitrack_core::tender::Tender;
use civitrack_db::repositories::{AlertRepo, MilestoneRepo, ProjectRepo, TenderRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::ProjectListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// A project with its derived progress figures inlined.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithMetrics {
    #[serde(flatten)]
    pub project: Project,
    pub metrics: ProjectMetrics,
}

impl ProjectWithMetrics {
    fn build(project: &Project, now: DateTime<Utc>) -> Self {
        Self {
            project: project.clone(),
            metrics: ProjectMetrics::compute_at(project, now),
        }
    }
}

/// Everything the project detail view shows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: ProjectWithMetrics,
    /// Sorted by date ascending.
    pub milestones: Vec<Milestone>,
    pub alerts: Vec<Alert>,
    pub tenders: Vec<Tender>,
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ProjectListParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<Vec<ProjectWithMetrics>>>> {
    let Query(params) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let now = Utc::now();
    let data = ProjectRepo::list_filtered(&state.dataset, &params.to_filter())
        .into_iter()
        .map(|p| ProjectWithMetrics::build(p, now))
        .collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects/active
pub async fn list_active(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProjectWithMetrics>>>> {
    let now = Utc::now();
    let data = ProjectRepo::list_active(&state.dataset)
        .into_iter()
        .map(|p| ProjectWithMetrics::build(p, now))
        .collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let dataset = &state.dataset;
    let project =
        ProjectRepo::find_by_id(dataset, &id).ok_or_else(|| AppError::not_found("Project", &id))?;

    let milestones = sort_by_date(MilestoneRepo::list_by_project(dataset, &id));
    let data = ProjectDetail {
        project: ProjectWithMetrics::build(project, Utc::now()),
        milestones: milestones.into_iter().cloned().collect(),
        alerts: cloned(AlertRepo::list_by_project(dataset, &id)),
        tenders: cloned(TenderRepo::list_by_project(dataset, &id)),
    };
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects/{id}/milestones
///
/// Unknown project ids yield an empty list.
pub async fn list_milestones(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Milestone>>>> {
    let data = cloned(MilestoneRepo::list_by_project(&state.dataset, &id));
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects/{id}/alerts
pub async fn list_alerts(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Alert>>>> {
    let data = cloned(AlertRepo::list_by_project(&state.dataset, &id));
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects/{id}/tenders
pub async fn list_tenders(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Tender>>>> {
    let data = cloned(TenderRepo::list_by_project(&state.dataset, &id));
    Ok(Json(DataResponse { data }))
}

fn cloned<T: Clone>(items: Vec<&T>) -> Vec<T> {
    items.into_iter().cloned().collect()
}
