use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::models::{Alert, NewAlert, NewStudent, RiskLevel, Severity, Student, StudentPatch};

/// The store shared across handlers. Mutations take the write lock, queries
/// the read lock; critical sections are synchronous and never held across an
/// await, so writers stay serialized the way the dashboard expects.
pub type SharedStore = Arc<RwLock<RosterStore>>;

pub fn shared(store: RosterStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}

/// In-memory holder of the student and alert collections. All data lives for
/// the lifetime of the process; there is no persistence behind it.
#[derive(Debug, Default)]
pub struct RosterStore {
    students: Vec<Student>,
    alerts: Vec<Alert>,
}

impl RosterStore {
    pub fn new(students: Vec<Student>, alerts: Vec<Alert>) -> Self {
        Self { students, alerts }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn student(&self, id: u64) -> Option<Student> {
        self.students.iter().find(|s| s.id == id).cloned()
    }

    pub fn student_name(&self, id: u64) -> Option<String> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.clone())
    }

    /// Inserts a student under the next id: max existing id + 1, or 1 on an
    /// empty roster. Safe because writers serialize through the store lock.
    pub fn add_student(&mut self, new: NewStudent) -> Student {
        let id = self.students.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let student = new.into_student(id);
        self.students.push(student.clone());
        student
    }

    /// Removes the student and cascades to every alert referencing it.
    /// Returns false, leaving both collections untouched, when the id is
    /// unknown.
    pub fn remove_student(&mut self, id: u64) -> bool {
        let before = self.students.len();
        self.students.retain(|s| s.id != id);
        if self.students.len() == before {
            return false;
        }
        self.alerts.retain(|a| a.student_id != id);
        true
    }

    /// Merges the present fields of the patch into the matching student.
    /// `None` when the id is unknown.
    pub fn update_student(&mut self, id: u64, patch: StudentPatch) -> Option<Student> {
        let student = self.students.iter_mut().find(|s| s.id == id)?;
        if let Some(name) = patch.name {
            student.name = name;
        }
        if let Some(grade) = patch.grade {
            student.grade = grade;
        }
        if let Some(risk_level) = patch.risk_level {
            student.risk_level = risk_level;
        }
        if let Some(performance) = patch.performance {
            student.performance = performance;
        }
        if let Some(attendance) = patch.attendance {
            student.attendance = attendance;
        }
        if let Some(engagement) = patch.engagement {
            student.engagement = engagement;
        }
        if let Some(avatar) = patch.avatar {
            student.avatar = avatar;
        }
        if let Some(recent_activity) = patch.recent_activity {
            student.recent_activity = recent_activity;
        }
        if let Some(email) = patch.email {
            student.email = email;
        }
        if let Some(phone) = patch.phone {
            student.phone = phone;
        }
        if let Some(parent_contact) = patch.parent_contact {
            student.parent_contact = parent_contact;
        }
        if let Some(subjects) = patch.subjects {
            student.subjects = subjects;
        }
        if let Some(enrollment_date) = patch.enrollment_date {
            student.enrollment_date = enrollment_date;
        }
        Some(student.clone())
    }

    /// Case-insensitive substring match against name, grade, email, or any
    /// enrolled subject. A blank query returns the whole roster.
    pub fn search_students(&self, query: &str) -> Vec<Student> {
        let query = query.trim();
        if query.is_empty() {
            return self.students.clone();
        }
        let needle = query.to_lowercase();
        self.students
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&needle)
                    || s.grade.to_lowercase().contains(&needle)
                    || s.email.to_lowercase().contains(&needle)
                    || s.subjects.iter().any(|sub| sub.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Marks the alert resolved. Idempotent; `None` when the id is unknown.
    pub fn resolve_alert(&mut self, alert_id: u64) -> Option<Alert> {
        let alert = self.alerts.iter_mut().find(|a| a.id == alert_id)?;
        alert.resolved = true;
        Some(alert.clone())
    }

    /// Same id scheme as students, scoped to the alert collection. The
    /// `student_id` reference is taken as-is; there is no membership check.
    pub fn add_alert(&mut self, new: NewAlert) -> Alert {
        let id = self.alerts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let alert = new.into_alert(id);
        self.alerts.push(alert.clone());
        alert
    }

    pub fn overview(&self) -> Overview {
        Overview {
            total_students: self.students.len(),
            at_risk_students: self
                .students
                .iter()
                .filter(|s| s.risk_level.is_at_risk())
                .count(),
            active_alerts: self.alerts.iter().filter(|a| !a.resolved).count(),
            average_performance: mean(self.students.iter().map(|s| s.performance)),
            average_attendance: mean(self.students.iter().map(|s| s.attendance)),
            average_engagement: mean(self.students.iter().map(|s| s.engagement)),
        }
    }

    pub fn risk_distribution(&self) -> RiskDistribution {
        let mut dist = RiskDistribution::default();
        for student in &self.students {
            match student.risk_level {
                RiskLevel::Low => dist.low += 1,
                RiskLevel::Medium => dist.medium += 1,
                RiskLevel::High => dist.high += 1,
            }
        }
        dist
    }

    /// Active alerts bucketed by severity, plus the resolved total.
    pub fn alert_counts(&self) -> AlertCounts {
        let mut counts = AlertCounts::default();
        for alert in &self.alerts {
            if alert.resolved {
                counts.resolved += 1;
                continue;
            }
            match alert.severity {
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
        }
        counts
    }
}

/// Mean rounded to one decimal, the precision the dashboard displays. Zero on
/// an empty roster; NaN has no JSON representation.
fn mean(values: impl Iterator<Item = i32>) -> f64 {
    let mut sum = 0i64;
    let mut count = 0u32;
    for value in values {
        sum += i64::from(value);
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    let raw = sum as f64 / f64::from(count);
    (raw * 10.0).round() / 10.0
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_students: usize,
    pub at_risk_students: usize,
    pub active_alerts: usize,
    pub average_performance: f64,
    pub average_attendance: f64,
    pub average_engagement: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AlertCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub resolved: usize,
}
