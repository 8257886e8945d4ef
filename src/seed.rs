//! The dataset installed at process start. Everything here lives in memory
//! only and is gone on shutdown.

use chrono::NaiveDate;

use crate::models::{Alert, RiskLevel, Severity, Student};
use crate::store::RosterStore;

pub fn initial_store() -> RosterStore {
    RosterStore::new(initial_students(), initial_alerts())
}

fn enrollment(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 9, 1).expect("valid enrollment date")
}

fn initial_students() -> Vec<Student> {
    vec![
        Student {
            id: 1,
            name: "Emma Rodriguez".to_string(),
            grade: "10th Grade".to_string(),
            risk_level: RiskLevel::Low,
            performance: 92,
            attendance: 98,
            engagement: 88,
            avatar: "/placeholder.svg".to_string(),
            recent_activity: "Completed Advanced Math Module".to_string(),
            email: "emma.rodriguez@school.edu".to_string(),
            phone: "(555) 123-4567".to_string(),
            parent_contact: "Maria Rodriguez - (555) 123-4568".to_string(),
            subjects: vec![
                "Mathematics".to_string(),
                "Science".to_string(),
                "English".to_string(),
            ],
            enrollment_date: enrollment(2023),
        },
        Student {
            id: 2,
            name: "Marcus Johnson".to_string(),
            grade: "11th Grade".to_string(),
            risk_level: RiskLevel::Medium,
            performance: 78,
            attendance: 85,
            engagement: 65,
            avatar: "/placeholder.svg".to_string(),
            recent_activity: "Missed 3 assignments this week".to_string(),
            email: "marcus.johnson@school.edu".to_string(),
            phone: "(555) 234-5678".to_string(),
            parent_contact: "Linda Johnson - (555) 234-5679".to_string(),
            subjects: vec![
                "History".to_string(),
                "English".to_string(),
                "Art".to_string(),
            ],
            enrollment_date: enrollment(2022),
        },
        Student {
            id: 3,
            name: "Aisha Patel".to_string(),
            grade: "9th Grade".to_string(),
            risk_level: RiskLevel::High,
            performance: 65,
            attendance: 72,
            engagement: 45,
            avatar: "/placeholder.svg".to_string(),
            recent_activity: "No login for 5 days".to_string(),
            email: "aisha.patel@school.edu".to_string(),
            phone: "(555) 345-6789".to_string(),
            parent_contact: "Raj Patel - (555) 345-6790".to_string(),
            subjects: vec![
                "Mathematics".to_string(),
                "Science".to_string(),
                "Social Studies".to_string(),
            ],
            enrollment_date: enrollment(2024),
        },
        Student {
            id: 4,
            name: "David Chen".to_string(),
            grade: "12th Grade".to_string(),
            risk_level: RiskLevel::Low,
            performance: 89,
            attendance: 94,
            engagement: 92,
            avatar: "/placeholder.svg".to_string(),
            recent_activity: "Submitted college application".to_string(),
            email: "david.chen@school.edu".to_string(),
            phone: "(555) 456-7890".to_string(),
            parent_contact: "Susan Chen - (555) 456-7891".to_string(),
            subjects: vec![
                "Physics".to_string(),
                "Calculus".to_string(),
                "Computer Science".to_string(),
            ],
            enrollment_date: enrollment(2021),
        },
    ]
}

fn initial_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            student_id: 3,
            alert_type: "attendance".to_string(),
            severity: Severity::High,
            message: "Has missed 5 consecutive days".to_string(),
            time_ago: "2 hours ago".to_string(),
            action: "Contact Parent".to_string(),
            resolved: false,
        },
        Alert {
            id: 2,
            student_id: 2,
            alert_type: "performance".to_string(),
            severity: Severity::Medium,
            message: "Declining grades in Mathematics".to_string(),
            time_ago: "1 day ago".to_string(),
            action: "Schedule Tutoring".to_string(),
            resolved: false,
        },
        Alert {
            id: 3,
            student_id: 4,
            alert_type: "engagement".to_string(),
            severity: Severity::Medium,
            message: "Low participation in online activities".to_string(),
            time_ago: "3 days ago".to_string(),
            action: "Check-in Meeting".to_string(),
            resolved: false,
        },
    ]
}
