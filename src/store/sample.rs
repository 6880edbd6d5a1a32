//! Fixed sample tasks shown when the store has nothing to offer.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Task, TaskPriority, TaskStatus};

struct SampleTask {
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    priority: TaskPriority,
    state: &'static str,
    anomaly_type: &'static str,
    assigned_to: &'static str,
    created_days_ago: i64,
    updated_days_ago: i64,
}

const SAMPLE_TASKS: [SampleTask; 6] = [
    SampleTask {
        title: "Verify duplicate Aadhaar IDs in Assam",
        description: "Review 1,247 potential duplicate records flagged by biometric matching",
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
        state: "Assam",
        anomaly_type: "Duplicate Aadhaar ID",
        assigned_to: "Verification Team A",
        created_days_ago: 3,
        updated_days_ago: 0,
    },
    SampleTask {
        title: "Cross-check PIN mismatch in West Bengal",
        description: "Validate 3,890 records with PIN codes not matching district mapping",
        status: TaskStatus::Pending,
        priority: TaskPriority::High,
        state: "West Bengal",
        anomaly_type: "Invalid PIN Code",
        assigned_to: "Data Quality Team",
        created_days_ago: 5,
        updated_days_ago: 1,
    },
    SampleTask {
        title: "Revalidate DOB missing cases in Bihar",
        description: "Process 892 records with missing date of birth",
        status: TaskStatus::Pending,
        priority: TaskPriority::Medium,
        state: "Bihar",
        anomaly_type: "Missing DOB",
        assigned_to: "Enrollment Center",
        created_days_ago: 7,
        updated_days_ago: 7,
    },
    SampleTask {
        title: "Manual verification - suspicious bulk enrollments",
        description: "Investigate 234 sequential Aadhaar IDs enrolled on same day at Patna center",
        status: TaskStatus::InProgress,
        priority: TaskPriority::Critical,
        state: "Bihar",
        anomaly_type: "Suspicious Pattern",
        assigned_to: "Fraud Investigation Unit",
        created_days_ago: 1,
        updated_days_ago: 0,
    },
    SampleTask {
        title: "Resolve mobile number conflicts in Delhi",
        description: "Process 567 cases where single mobile linked to multiple Aadhaar",
        status: TaskStatus::Done,
        priority: TaskPriority::High,
        state: "Delhi",
        anomaly_type: "Invalid Phone Format",
        assigned_to: "Call Center Team",
        created_days_ago: 10,
        updated_days_ago: 2,
    },
    SampleTask {
        title: "Update biometric quality scores - Maharashtra",
        description: "Re-enroll 1,450 records with low biometric quality",
        status: TaskStatus::Pending,
        priority: TaskPriority::Low,
        state: "Maharashtra",
        anomaly_type: "Biometric Quality Issues",
        assigned_to: "Field Team B",
        created_days_ago: 14,
        updated_days_ago: 14,
    },
];

/// The sample tasks with timestamps relative to `now`.
///
/// Ids are negative so they never collide with store-issued ids.
pub fn sample_tasks(now: DateTime<Utc>) -> Vec<Task> {
    SAMPLE_TASKS
        .iter()
        .zip(1i64..)
        .map(|(s, n)| Task {
            id: -n,
            title: s.title.to_string(),
            description: Some(s.description.to_string()),
            status: s.status,
            priority: s.priority,
            state: Some(s.state.to_string()),
            anomaly_type: Some(s.anomaly_type.to_string()),
            assigned_to: Some(s.assigned_to.to_string()),
            created_at: now - Duration::days(s.created_days_ago),
            updated_at: now - Duration::days(s.updated_days_ago),
        })
        .collect()
}
