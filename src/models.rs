use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Manually assigned risk label. Never derived from the metrics; advisors set
/// it from their own judgement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn is_at_risk(self) -> bool {
        matches!(self, RiskLevel::Medium | RiskLevel::High)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: u64,
    pub name: String,
    pub grade: String,
    pub risk_level: RiskLevel,
    /// Percentage metrics. Integers in [0,100] by convention only; the store
    /// accepts whatever the caller sends.
    pub performance: i32,
    pub attendance: i32,
    pub engagement: i32,
    pub avatar: String,
    pub recent_activity: String,
    pub email: String,
    pub phone: String,
    pub parent_contact: String,
    pub subjects: Vec<String>,
    pub enrollment_date: NaiveDate,
}

/// A student minus the id, which the store assigns on insert.
#[derive(Clone, Debug)]
pub struct NewStudent {
    pub name: String,
    pub grade: String,
    pub risk_level: RiskLevel,
    pub performance: i32,
    pub attendance: i32,
    pub engagement: i32,
    pub avatar: String,
    pub recent_activity: String,
    pub email: String,
    pub phone: String,
    pub parent_contact: String,
    pub subjects: Vec<String>,
    pub enrollment_date: NaiveDate,
}

impl NewStudent {
    pub fn into_student(self, id: u64) -> Student {
        Student {
            id,
            name: self.name,
            grade: self.grade,
            risk_level: self.risk_level,
            performance: self.performance,
            attendance: self.attendance,
            engagement: self.engagement,
            avatar: self.avatar,
            recent_activity: self.recent_activity,
            email: self.email,
            phone: self.phone,
            parent_contact: self.parent_contact,
            subjects: self.subjects,
            enrollment_date: self.enrollment_date,
        }
    }
}

/// Partial update; only the fields that are present get merged.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    pub name: Option<String>,
    pub grade: Option<String>,
    pub risk_level: Option<RiskLevel>,
    pub performance: Option<i32>,
    pub attendance: Option<i32>,
    pub engagement: Option<i32>,
    pub avatar: Option<String>,
    pub recent_activity: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub parent_contact: Option<String>,
    pub subjects: Option<Vec<String>>,
    pub enrollment_date: Option<NaiveDate>,
}

/// A flagged concern tied to one student. The student's display name is not
/// stored here; readers join the roster by `student_id` so a rename can never
/// leave a stale snapshot behind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: u64,
    pub student_id: u64,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub severity: Severity,
    pub message: String,
    pub time_ago: String,
    pub action: String,
    pub resolved: bool,
}

/// An alert minus the id, which the store assigns on insert.
#[derive(Clone, Debug)]
pub struct NewAlert {
    pub student_id: u64,
    pub alert_type: String,
    pub severity: Severity,
    pub message: String,
    pub time_ago: String,
    pub action: String,
    pub resolved: bool,
}

impl NewAlert {
    pub fn into_alert(self, id: u64) -> Alert {
        Alert {
            id,
            student_id: self.student_id,
            alert_type: self.alert_type,
            severity: self.severity,
            message: self.message,
            time_ago: self.time_ago,
            action: self.action,
            resolved: self.resolved,
        }
    }
}
