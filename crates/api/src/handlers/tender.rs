//! Handlers for the `/tenders` resource.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use civitrack_core::filters::TenderTabCounts;
use civitrack_core::project::Project;
use civitrack_core::tender::Tender;
use civitrack_db::repositories::{ProjectRepo, TenderRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::TenderListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Filtered tenders plus the per-tab totals over the whole dataset.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderListing {
    pub tenders: Vec<Tender>,
    pub counts: TenderTabCounts,
}

/// A tender together with the project it belongs to.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderDetail {
    #[serde(flatten)]
    pub tender: Tender,
    pub project: Project,
}

/// GET /api/v1/tenders
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<TenderListParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<TenderListing>>> {
    let Query(params) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let dataset = &state.dataset;
    let tenders = TenderRepo::list_filtered(dataset, &params.to_filter())
        .into_iter()
        .cloned()
        .collect();
    let data = TenderListing {
        tenders,
        counts: TenderRepo::tab_counts(dataset),
    };
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/tenders/active
pub async fn list_active(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Tender>>>> {
    let data = TenderRepo::list_active(&state.dataset)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/tenders/{id}
///
/// 404 for the tender when it is missing or its project does not resolve.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<TenderDetail>>> {
    let dataset = &state.dataset;
    let tender =
        TenderRepo::find_by_id(dataset, &id).ok_or_else(|| AppError::not_found("Tender", &id))?;
    let Some(project) = ProjectRepo::find_by_id(dataset, &tender.project_id) else {
        tracing::warn!(
            tender_id = %id,
            project_id = %tender.project_id,
            "Tender references a missing project"
        );
        return Err(AppError::not_found("Tender", &id));
    };

    let data = TenderDetail {
        tender: tender.clone(),
        project: project.clone(),
    };
    Ok(Json(DataResponse { data }))
}
