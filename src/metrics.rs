use crate::models::{RiskLevel, Severity};
use crate::store::RosterStore;

/// Seeds the collection gauges at startup so Grafana panels have values
/// before the first mutation.
pub fn init_metrics(store: &RosterStore) {
    refresh_collection_gauges(store);
    tracing::info!(
        "Initialized metrics: students={}, alerts={}",
        store.students().len(),
        store.alerts().len()
    );
}

/// Recomputes the collection-size gauges from the store. Called after every
/// mutation; the collections are small enough that a full recount is cheaper
/// than tracking deltas.
pub fn refresh_collection_gauges(store: &RosterStore) {
    metrics::gauge!("campuspulse_students_total").set(store.students().len() as f64);

    let dist = store.risk_distribution();
    for (level, count) in [
        (RiskLevel::Low, dist.low),
        (RiskLevel::Medium, dist.medium),
        (RiskLevel::High, dist.high),
    ] {
        metrics::gauge!("campuspulse_students_risk_total", "level" => level.as_str())
            .set(count as f64);
    }

    let active = store.alerts().iter().filter(|a| !a.resolved).count();
    metrics::gauge!("campuspulse_alerts_active_total").set(active as f64);
}

pub fn student_added() {
    metrics::counter!("campuspulse_students_added_total").increment(1);
}

pub fn student_removed() {
    metrics::counter!("campuspulse_students_removed_total").increment(1);
}

pub fn alert_created(severity: Severity) {
    metrics::counter!("campuspulse_alerts_created_total", "severity" => severity.as_str())
        .increment(1);
}

pub fn alert_resolved() {
    metrics::counter!("campuspulse_alerts_resolved_total").increment(1);
}
