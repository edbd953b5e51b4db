use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use civitrack_core::alert::Alert;
use civitrack_db::repositories::AlertRepo;

use crate::error::{AppError, AppResult};
use crate::query::AlertListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/alerts
///
/// Newest first, narrowed by `search`, `severity`, `type` and `read`.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<AlertListParams>, QueryRejection>,
) -> AppResult<Json<DataResponse<Vec<Alert>>>> {
    let Query(params) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let data = AlertRepo::list_filtered(&state.dataset, &params.to_filter())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(DataResponse { data }))
}
