mod common;

use axum::http::StatusCode;
use common::{get_json, seeded_app, send_empty};

#[tokio::test]
async fn health_answers_ok() {
    let app = seeded_app();
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn overview_reports_seed_aggregates() {
    let app = seeded_app();
    let (status, body) = get_json(&app, "/dashboard/overview").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalStudents"], 4);
    // Marcus (medium) and Aisha (high).
    assert_eq!(body["atRiskStudents"], 2);
    assert_eq!(body["activeAlerts"], 3);
    // (92 + 78 + 65 + 89) / 4
    assert_eq!(body["averagePerformance"].as_f64(), Some(81.0));
    // (98 + 85 + 72 + 94) / 4 = 87.25, displayed at one decimal
    assert_eq!(body["averageAttendance"].as_f64(), Some(87.3));
    // (88 + 65 + 45 + 92) / 4
    assert_eq!(body["averageEngagement"].as_f64(), Some(72.5));
}

#[tokio::test]
async fn overview_recomputes_after_mutations() {
    let app = seeded_app();
    send_empty(&app, "DELETE", "/students/3").await;
    send_empty(&app, "POST", "/alerts/3/resolve").await;

    let (_, body) = get_json(&app, "/dashboard/overview").await;
    assert_eq!(body["totalStudents"], 3);
    assert_eq!(body["atRiskStudents"], 1);
    // Student 3 took one alert down with them; resolving another leaves one.
    assert_eq!(body["activeAlerts"], 1);
    // (92 + 78 + 89) / 3 = 86.333...
    assert_eq!(body["averagePerformance"].as_f64(), Some(86.3));
}

#[tokio::test]
async fn risk_distribution_buckets_the_roster() {
    let app = seeded_app();
    let (status, body) = get_json(&app, "/dashboard/risk-distribution").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["low"], 2);
    assert_eq!(body["medium"], 1);
    assert_eq!(body["high"], 1);
}

#[tokio::test]
async fn performance_trends_serves_the_chart_series() {
    let app = seeded_app();
    let (status, body) = get_json(&app, "/dashboard/performance-trends").await;
    assert_eq!(status, StatusCode::OK);
    let points = body.as_array().unwrap();
    assert_eq!(points.len(), 6);
    assert_eq!(points[0]["month"], "Jan");
    assert_eq!(points[0]["performance"], 78);
    assert_eq!(points[5]["engagement"], 87);
}
