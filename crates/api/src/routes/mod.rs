pub mod alert;
pub mod dashboard;
pub mod health;
pub mod project;
pub mod tender;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /dashboard/summary                   portfolio totals and counts
///
/// /projects                            list (status, search)
/// /projects/active                     active projects
/// /projects/{id}                       detail with metrics and related records
/// /projects/{id}/milestones            milestones in storage order
/// /projects/{id}/alerts                alerts in storage order
/// /projects/{id}/tenders               tenders in storage order
///
/// /alerts                              newest first (search, severity, type, read)
///
/// /tenders                             list (tab, status, search) + tab counts
/// /tenders/active                      published tenders
/// /tenders/{id}                        tender with owning project
/// /tenders/{id}/bids                   validate a bid submission (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/dashboard", dashboard::router())
        .nest("/projects", project::router())
        .nest("/alerts", alert::router())
        .nest("/tenders", tender::router())
}
