use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::metrics;
use crate::models::{Alert, NewAlert, Severity};
use crate::store::{RosterStore, SharedStore};

/// Alerts go over the wire with the student's display name joined in live
/// from the roster. `student` is null only for a dangling `studentId`, which
/// can arise when an alert was created against an id that never existed;
/// removal always cascades.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertResponse {
    pub id: u64,
    pub student: Option<String>,
    pub student_id: u64,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub severity: Severity,
    pub message: String,
    pub time_ago: String,
    pub action: String,
    pub resolved: bool,
}

fn to_response(alert: Alert, store: &RosterStore) -> AlertResponse {
    AlertResponse {
        id: alert.id,
        student: store.student_name(alert.student_id),
        student_id: alert.student_id,
        alert_type: alert.alert_type,
        severity: alert.severity,
        message: alert.message,
        time_ago: alert.time_ago,
        action: alert.action,
        resolved: alert.resolved,
    }
}

#[derive(Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    Active,
    Resolved,
}

#[derive(Deserialize)]
pub struct ListAlertsParams {
    pub status: Option<StatusFilter>,
}

// GET /alerts?status=active|resolved
pub async fn list_alerts(
    Extension(store): Extension<SharedStore>,
    Query(params): Query<ListAlertsParams>,
) -> Response {
    let store = store.read();
    let response: Vec<AlertResponse> = store
        .alerts()
        .iter()
        .filter(|a| match params.status {
            Some(StatusFilter::Active) => !a.resolved,
            Some(StatusFilter::Resolved) => a.resolved,
            None => true,
        })
        .map(|a| to_response(a.clone(), &store))
        .collect();
    (StatusCode::OK, Json(response)).into_response()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertRequest {
    pub student_id: u64,
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
    pub severity: Option<Severity>,
    pub message: Option<String>,
    pub time_ago: Option<String>,
    pub action: Option<String>,
}

// POST /alerts
pub async fn create_alert(
    Extension(store): Extension<SharedStore>,
    Json(payload): Json<CreateAlertRequest>,
) -> Response {
    let message = payload.message.as_deref().map(str::trim).unwrap_or_default();
    if message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Alert message is required."})),
        )
            .into_response();
    }

    let new_alert = NewAlert {
        student_id: payload.student_id,
        alert_type: payload
            .alert_type
            .unwrap_or_else(|| "general".to_string()),
        severity: payload.severity.unwrap_or(Severity::Low),
        message: message.to_string(),
        time_ago: payload.time_ago.unwrap_or_else(|| "just now".to_string()),
        action: payload.action.unwrap_or_else(|| "Review".to_string()),
        resolved: false,
    };

    let mut store = store.write();
    // The store takes the reference as-is; flag the dangling case for whoever
    // reads the logs.
    if store.student_name(new_alert.student_id).is_none() {
        warn!(
            "Alert created for unknown student id {}",
            new_alert.student_id
        );
    }
    let alert = store.add_alert(new_alert);
    metrics::alert_created(alert.severity);
    metrics::refresh_collection_gauges(&store);

    tracing::Span::current()
        .record("alert_id", alert.id)
        .record("student_id", alert.student_id)
        .record("action", "create_alert");
    info!("Created alert {} for student {}", alert.id, alert.student_id);

    let response = to_response(alert, &store);
    (StatusCode::CREATED, Json(response)).into_response()
}

// POST /alerts/:id/resolve
pub async fn resolve_alert(
    Extension(store): Extension<SharedStore>,
    Path(alert_id): Path<u64>,
) -> Response {
    let mut store = store.write();
    match store.resolve_alert(alert_id) {
        Some(alert) => {
            metrics::alert_resolved();
            metrics::refresh_collection_gauges(&store);
            tracing::Span::current()
                .record("alert_id", alert.id)
                .record("action", "resolve_alert")
                .record("business_event", "Alert resolved");
            info!("Resolved alert {}", alert.id);
            let response = to_response(alert, &store);
            (StatusCode::OK, Json(response)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Alert not found"})),
        )
            .into_response(),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummaryResponse {
    pub high_priority: usize,
    pub medium_priority: usize,
    pub low_priority: usize,
    pub resolved: usize,
    pub recent: Vec<AlertResponse>,
}

// GET /alerts/summary
pub async fn alert_summary(Extension(store): Extension<SharedStore>) -> Response {
    let store = store.read();
    let counts = store.alert_counts();
    let recent: Vec<AlertResponse> = store
        .alerts()
        .iter()
        .take(5)
        .map(|a| to_response(a.clone(), &store))
        .collect();
    let response = AlertSummaryResponse {
        high_priority: counts.high,
        medium_priority: counts.medium,
        low_priority: counts.low,
        resolved: counts.resolved,
        recent,
    };
    (StatusCode::OK, Json(response)).into_response()
}
