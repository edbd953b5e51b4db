//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET /                      -> list
/// GET /active                -> list_active
/// GET /{id}                  -> get_by_id
/// GET /{id}/milestones       -> list_milestones
/// GET /{id}/alerts           -> list_alerts
/// GET /{id}/tenders          -> list_tenders
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/active", get(project::list_active))
        .route("/{id}", get(project::get_by_id))
        .route("/{id}/milestones", get(project::list_milestones))
        .route("/{id}/alerts", get(project::list_alerts))
        .route("/{id}/tenders", get(project::list_tenders))
}
