pub mod alerts;
pub mod dashboard;
pub mod students;

use axum::{
    routing::{get, post},
    Extension, Router,
};

use crate::store::SharedStore;

async fn health_check() -> &'static str {
    "OK"
}

/// The route table over the shared store. The binary wraps this with the
/// tracing, CORS, and Prometheus layers; tests drive it directly.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/students",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/students/:id",
            get(students::get_student)
                .patch(students::update_student)
                .delete(students::delete_student),
        )
        .route("/alerts", get(alerts::list_alerts).post(alerts::create_alert))
        .route("/alerts/summary", get(alerts::alert_summary))
        .route("/alerts/:id/resolve", post(alerts::resolve_alert))
        .route("/dashboard/overview", get(dashboard::overview))
        .route(
            "/dashboard/risk-distribution",
            get(dashboard::risk_distribution),
        )
        .route(
            "/dashboard/performance-trends",
            get(dashboard::performance_trends),
        )
        .layer(Extension(store))
}
