use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::metrics;
use crate::models::{NewStudent, RiskLevel, StudentPatch};
use crate::store::SharedStore;

#[derive(Deserialize)]
pub struct ListStudentsParams {
    /// Substring search across name, grade, email, and subjects.
    pub q: Option<String>,
    /// Narrows the (searched) roster to one risk level. Applied here rather
    /// than in the store; the search contract itself knows nothing about risk.
    pub risk: Option<RiskLevel>,
}

// GET /students?q=&risk=
pub async fn list_students(
    Extension(store): Extension<SharedStore>,
    Query(params): Query<ListStudentsParams>,
) -> Response {
    let store = store.read();
    let mut students = store.search_students(params.q.as_deref().unwrap_or(""));
    if let Some(risk) = params.risk {
        students.retain(|s| s.risk_level == risk);
    }
    (StatusCode::OK, Json(students)).into_response()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub name: Option<String>,
    pub grade: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub parent_contact: Option<String>,
    pub risk_level: Option<RiskLevel>,
    pub performance: Option<i32>,
    pub attendance: Option<i32>,
    pub engagement: Option<i32>,
    pub avatar: Option<String>,
    pub recent_activity: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub enrollment_date: Option<NaiveDate>,
}

// POST /students
pub async fn create_student(
    Extension(store): Extension<SharedStore>,
    Json(payload): Json<CreateStudentRequest>,
) -> Response {
    // Same required set as the enrollment form: name, grade, email.
    let name = payload.name.as_deref().map(str::trim).unwrap_or_default();
    let grade = payload.grade.as_deref().map(str::trim).unwrap_or_default();
    let email = payload.email.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() || grade.is_empty() || email.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Please fill in all required fields."})),
        )
            .into_response();
    }

    let recent_activity = payload
        .recent_activity
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| "Recently enrolled".to_string());

    let new_student = NewStudent {
        name: name.to_string(),
        grade: grade.to_string(),
        email: email.to_string(),
        phone: payload.phone.unwrap_or_default(),
        parent_contact: payload.parent_contact.unwrap_or_default(),
        risk_level: payload.risk_level.unwrap_or(RiskLevel::Low),
        performance: payload.performance.unwrap_or(75),
        attendance: payload.attendance.unwrap_or(95),
        engagement: payload.engagement.unwrap_or(80),
        avatar: payload
            .avatar
            .unwrap_or_else(|| "/placeholder.svg".to_string()),
        recent_activity,
        subjects: payload.subjects.unwrap_or_default(),
        enrollment_date: payload
            .enrollment_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive()),
    };

    let mut store = store.write();
    let student = store.add_student(new_student);
    metrics::student_added();
    metrics::refresh_collection_gauges(&store);

    tracing::Span::current()
        .record("student_id", student.id)
        .record("action", "create_student")
        .record("business_event", "Student added to roster");
    info!("Added student {} ({})", student.id, student.name);

    (StatusCode::CREATED, Json(student)).into_response()
}

// GET /students/:id
pub async fn get_student(
    Extension(store): Extension<SharedStore>,
    Path(student_id): Path<u64>,
) -> Response {
    match store.read().student(student_id) {
        Some(student) => (StatusCode::OK, Json(student)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Student not found"})),
        )
            .into_response(),
    }
}

// PATCH /students/:id
pub async fn update_student(
    Extension(store): Extension<SharedStore>,
    Path(student_id): Path<u64>,
    Json(patch): Json<StudentPatch>,
) -> Response {
    let mut store = store.write();
    match store.update_student(student_id, patch) {
        Some(student) => {
            metrics::refresh_collection_gauges(&store);
            tracing::Span::current()
                .record("student_id", student.id)
                .record("action", "update_student");
            info!("Updated student {}", student.id);
            (StatusCode::OK, Json(student)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Student not found"})),
        )
            .into_response(),
    }
}

// DELETE /students/:id
pub async fn delete_student(
    Extension(store): Extension<SharedStore>,
    Path(student_id): Path<u64>,
) -> Response {
    let mut store = store.write();
    if !store.remove_student(student_id) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Student not found"})),
        )
            .into_response();
    }
    metrics::student_removed();
    metrics::refresh_collection_gauges(&store);

    tracing::Span::current()
        .record("student_id", student_id)
        .record("action", "delete_student")
        .record("business_event", "Student removed with alerts");
    info!("Removed student {} and their alerts", student_id);

    (
        StatusCode::OK,
        Json(json!({"message": "Student removed"})),
    )
        .into_response()
}
