mod common;

use axum::http::StatusCode;
use common::{get_json, seeded_app, send_empty, send_json};
use serde_json::json;

#[tokio::test]
async fn list_returns_seeded_roster() {
    let app = seeded_app();
    let (status, body) = get_json(&app, "/students").await;
    assert_eq!(status, StatusCode::OK);
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 4);
    assert_eq!(students[0]["name"], "Emma Rodriguez");
    // Wire casing is camelCase.
    assert_eq!(students[0]["riskLevel"], "low");
    assert_eq!(students[2]["recentActivity"], "No login for 5 days");
}

#[tokio::test]
async fn search_matches_subject_case_insensitively() {
    let app = seeded_app();
    let (status, body) = get_json(&app, "/students?q=math").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_u64().unwrap())
        .collect();
    // Emma and Aisha list Mathematics.
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn search_matches_name_and_email() {
    let app = seeded_app();
    let (_, body) = get_json(&app, "/students?q=PATEL").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Aisha Patel");

    let (_, body) = get_json(&app, "/students?q=david.chen@school.edu").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], 4);
}

#[tokio::test]
async fn blank_query_returns_everyone() {
    let app = seeded_app();
    let (_, body) = get_json(&app, "/students?q=").await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn risk_filter_narrows_results() {
    let app = seeded_app();
    let (_, body) = get_json(&app, "/students?risk=high").await;
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["name"], "Aisha Patel");

    // Search and risk filter compose: three students match "science", but
    // only Aisha is high risk.
    let (_, body) = get_json(&app, "/students?q=science&risk=high").await;
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["id"], 3);
}

#[tokio::test]
async fn create_assigns_next_id_and_form_defaults() {
    let app = seeded_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/students",
        json!({
            "name": "Noor Haddad",
            "grade": "10th Grade",
            "email": "noor.haddad@school.edu"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 5);
    assert_eq!(body["performance"], 75);
    assert_eq!(body["attendance"], 95);
    assert_eq!(body["engagement"], 80);
    assert_eq!(body["riskLevel"], "low");
    assert_eq!(body["avatar"], "/placeholder.svg");
    assert_eq!(body["recentActivity"], "Recently enrolled");
    assert_eq!(body["subjects"], json!([]));

    let (_, roster) = get_json(&app, "/students").await;
    assert_eq!(roster.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn create_rejects_missing_required_fields() {
    let app = seeded_app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/students",
        json!({"name": "No Grade Or Email"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please fill in all required fields.");

    // Blank-but-present counts as missing too.
    let (status, _) = send_json(
        &app,
        "POST",
        "/students",
        json!({"name": "  ", "grade": "9th Grade", "email": "x@school.edu"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, roster) = get_json(&app, "/students").await;
    assert_eq!(roster.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn get_student_by_id() {
    let app = seeded_app();
    let (status, body) = get_json(&app, "/students/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Aisha Patel");

    let (status, body) = get_json(&app, "/students/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

#[tokio::test]
async fn patch_merges_partial_update() {
    let app = seeded_app();
    let (status, body) = send_json(
        &app,
        "PATCH",
        "/students/2",
        json!({"riskLevel": "high", "recentActivity": "Missed parent meeting"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], "high");
    assert_eq!(body["recentActivity"], "Missed parent meeting");
    // Untouched fields survive.
    assert_eq!(body["name"], "Marcus Johnson");
    assert_eq!(body["performance"], 78);

    let (_, fetched) = get_json(&app, "/students/2").await;
    assert_eq!(fetched["riskLevel"], "high");
}

#[tokio::test]
async fn patch_unknown_student_is_not_found() {
    let app = seeded_app();
    let (status, _) = send_json(&app, "PATCH", "/students/42", json!({"name": "Ghost"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_student_and_their_alerts() {
    let app = seeded_app();
    let (status, body) = send_empty(&app, "DELETE", "/students/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student removed");

    let (_, roster) = get_json(&app, "/students").await;
    let ids: Vec<u64> = roster
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 4]);

    // The seed alert against student 3 is gone with them.
    let (_, alerts) = get_json(&app, "/alerts").await;
    let alerts = alerts.as_array().unwrap();
    assert_eq!(alerts.len(), 2);
    assert!(alerts.iter().all(|a| a["studentId"] != 3));
}

#[tokio::test]
async fn delete_unknown_student_changes_nothing() {
    let app = seeded_app();
    let (status, _) = send_empty(&app, "DELETE", "/students/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, roster) = get_json(&app, "/students").await;
    assert_eq!(roster.as_array().unwrap().len(), 4);
    let (_, alerts) = get_json(&app, "/alerts").await;
    assert_eq!(alerts.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_after_removal_follows_surviving_max() {
    // Roster {1,2,3,4}: removing 3 leaves max 4, so the next id is 5.
    let app = seeded_app();
    send_empty(&app, "DELETE", "/students/3").await;
    let (_, body) = send_json(
        &app,
        "POST",
        "/students",
        json!({"name": "Dana Cruz", "grade": "9th Grade", "email": "dana.cruz@school.edu"}),
    )
    .await;
    assert_eq!(body["id"], 5);
}
