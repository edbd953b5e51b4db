//! HTTP-level integration tests for the `/dashboard` endpoints.

mod common;

use axum::http::StatusCode;
use civitrack_db::Dataset;
use common::{body_json, get};

#[tokio::test]
async fn summary_totals_the_portfolio() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/dashboard/summary").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["activeProjects"], 2);
    assert_eq!(data["activeTenders"], 3);
    assert_eq!(data["unreadAlerts"], 4);
    assert_eq!(data["totalBudget"], 42_750_000.0);
    assert_eq!(data["totalSpent"], 21_330_000.0);
    assert_eq!(data["remainingFunds"], 21_420_000.0);
    assert_eq!(data["budgetUsedPercent"], 50);
}

#[tokio::test]
async fn summary_of_empty_dataset_is_zeroed() {
    let app = common::build_test_app_with(Dataset::default());
    let json = body_json(get(app, "/api/v1/dashboard/summary").await).await;

    let data = &json["data"];
    assert_eq!(data["activeProjects"], 0);
    assert_eq!(data["totalBudget"], 0.0);
    assert_eq!(data["budgetUsedPercent"], 0);
}
