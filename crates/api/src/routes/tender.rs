//! Route definitions for the `/tenders` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{bid, tender};
use crate::state::AppState;

/// Routes mounted at `/tenders`.
///
/// ```text
/// GET  /              -> list
/// GET  /active        -> list_active
/// GET  /{id}          -> get_by_id
/// POST /{id}/bids     -> bid::submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tender::list))
        .route("/active", get(tender::list_active))
        .route("/{id}", get(tender::get_by_id))
        .route("/{id}/bids", post(bid::submit))
}
