//! Handler for bid submissions on a tender.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use civitrack_core::bid::{validate_bid_submission, BidSubmission};
use civitrack_core::tender::Bid;
use civitrack_db::repositories::TenderRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/tenders/{id}/bids
///
/// Validates the submission and echoes the resulting draft bid. The dataset
/// is read-only, so the draft is not stored.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<BidSubmission>, JsonRejection>,
) -> AppResult<Json<DataResponse<Bid>>> {
    let tender = TenderRepo::find_by_id(&state.dataset, &id)
        .ok_or_else(|| AppError::not_found("Tender", &id))?;
    let Json(submission) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let bid = validate_bid_submission(tender, &submission, Utc::now().date_naive())?;
    tracing::info!(tender_id = %id, bid_id = %bid.id, "Bid submission validated");
    Ok(Json(DataResponse { data: bid }))
}
