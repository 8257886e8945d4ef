use axum::{extract::Extension, http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::Serialize;

use crate::store::SharedStore;

// GET /dashboard/overview
pub async fn overview(Extension(store): Extension<SharedStore>) -> Response {
    (StatusCode::OK, Json(store.read().overview())).into_response()
}

// GET /dashboard/risk-distribution
pub async fn risk_distribution(Extension(store): Extension<SharedStore>) -> Response {
    (StatusCode::OK, Json(store.read().risk_distribution())).into_response()
}

#[derive(Serialize)]
pub struct TrendPoint {
    pub month: &'static str,
    pub performance: i32,
    pub engagement: i32,
}

/// The six-month series behind the trends chart. Historical aggregation is
/// out of scope, so the dashboard charts this fixed series.
const PERFORMANCE_TRENDS: [TrendPoint; 6] = [
    TrendPoint { month: "Jan", performance: 78, engagement: 82 },
    TrendPoint { month: "Feb", performance: 82, engagement: 85 },
    TrendPoint { month: "Mar", performance: 79, engagement: 88 },
    TrendPoint { month: "Apr", performance: 85, engagement: 84 },
    TrendPoint { month: "May", performance: 88, engagement: 90 },
    TrendPoint { month: "Jun", performance: 84, engagement: 87 },
];

// GET /dashboard/performance-trends
pub async fn performance_trends() -> Response {
    (StatusCode::OK, Json(PERFORMANCE_TRENDS)).into_response()
}
