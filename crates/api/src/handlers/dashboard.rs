use axum::extract::State;
use axum::Json;
use civitrack_core::dashboard::DashboardSummary;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/summary
pub async fn summary(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let dataset = &state.dataset;
    let data = DashboardSummary::compute(dataset.projects(), dataset.alerts(), dataset.tenders());
    Ok(Json(DataResponse { data }))
}
