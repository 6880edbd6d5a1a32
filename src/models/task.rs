//! Remediation task model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(format!("unknown task status `{}`", other)),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Critical => "critical",
        }
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            "critical" => Ok(TaskPriority::Critical),
            other => Err(format!("unknown task priority `{}`", other)),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub state: Option<String>,
    pub anomaly_type: Option<String>,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row as stored in `todo_tasks`.
#[derive(Debug, FromRow)]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub state: Option<String>,
    pub anomaly_type: Option<String>,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<TaskRow> for Task {
    type Error = String;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        Ok(Task {
            id: row.id,
            title: row.title,
            description: row.description,
            status: row.status.parse()?,
            priority: row.priority.parse()?,
            state: row.state,
            anomaly_type: row.anomaly_type,
            assigned_to: row.assigned_to,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, max = 255, message = "Title is required and must not exceed 255 characters")
    )]
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    #[validate(length(max = 100))]
    pub state: Option<String>,
    #[validate(length(max = 100))]
    pub anomaly_type: Option<String>,
    #[validate(length(max = 100))]
    pub assigned_to: Option<String>,
}

/// Validated insert.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub state: Option<String>,
    pub anomaly_type: Option<String>,
    pub assigned_to: Option<String>,
}

impl CreateTask {
    /// `None` when the title is missing; call after `validate()`.
    pub fn into_new_task(self) -> Option<NewTask> {
        Some(NewTask {
            title: self.title?,
            description: self.description,
            status: self.status.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            state: self.state,
            anomaly_type: self.anomaly_type,
            assigned_to: self.assigned_to,
        })
    }
}

/// Reads a present field as `Some`, keeping an explicit `null` as `Some(None)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Partial update; absent fields are left untouched.
///
/// The optional text fields distinguish "absent" (`None`) from an explicit
/// `null` (`Some(None)`), which clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 100))]
    pub state: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 100))]
    pub anomaly_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[validate(length(max = 100))]
    pub assigned_to: Option<Option<String>>,
}

impl UpdateTask {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.state.is_none()
            && self.anomaly_type.is_none()
            && self.assigned_to.is_none()
    }

    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(state) = self.state {
            task.state = state;
        }
        if let Some(anomaly_type) = self.anomaly_type {
            task.anomaly_type = anomaly_type;
        }
        if let Some(assigned_to) = self.assigned_to {
            task.assigned_to = assigned_to;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub state: Option<String>,
}

impl TaskFilter {
    /// Blank query values mean "no filter".
    pub fn normalized(self) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.is_empty());
        Self {
            status: keep(self.status),
            priority: keep(self.priority),
            state: keep(self.state),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.status.as_deref().map_or(true, |s| task.status.as_str() == s)
            && self.priority.as_deref().map_or(true, |p| task.priority.as_str() == p)
            && self.state.as_deref().map_or(true, |s| task.state.as_deref() == Some(s))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub done: usize,
    pub by_priority: PriorityCounts,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut stats = TaskStats {
            total: tasks.len(),
            ..Default::default()
        };

        for task in tasks {
            match task.status {
                TaskStatus::Pending => stats.pending += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Done => stats.done += 1,
            }
            match task.priority {
                TaskPriority::Critical => stats.by_priority.critical += 1,
                TaskPriority::High => stats.by_priority.high += 1,
                TaskPriority::Medium => stats.by_priority.medium += 1,
                TaskPriority::Low => stats.by_priority.low += 1,
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(status: TaskStatus, priority: TaskPriority, state: Option<&str>) -> Task {
        let now = Utc::now();
        Task {
            id: 1,
            title: "Verify duplicates".to_string(),
            description: None,
            status,
            priority,
            state: state.map(str::to_string),
            anomaly_type: None,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn create_requires_title() {
        let req: CreateTask = serde_json::from_str(r#"{"description": "no title"}"#).unwrap();
        let err = req.validate().unwrap_err();
        assert!(err.field_errors().contains_key("title"));

        let req: CreateTask = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn create_applies_defaults() {
        let req: CreateTask = serde_json::from_str(r#"{"title": "Check PINs"}"#).unwrap();
        assert!(req.validate().is_ok());
        let new = req.into_new_task().unwrap();
        assert_eq!(new.status, TaskStatus::Pending);
        assert_eq!(new.priority, TaskPriority::Medium);
    }

    #[test]
    fn rejects_unknown_status() {
        let parsed = serde_json::from_str::<CreateTask>(r#"{"title": "x", "status": "archived"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut t = task(TaskStatus::Pending, TaskPriority::Low, Some("Assam"));
        let update: UpdateTask = serde_json::from_str(r#"{"status": "done", "unknown": 1}"#).unwrap();
        assert!(!update.is_empty());
        update.apply(&mut t);
        assert_eq!(t.status, TaskStatus::Done);
        assert_eq!(t.priority, TaskPriority::Low);
        assert_eq!(t.state.as_deref(), Some("Assam"));

        let empty: UpdateTask = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn explicit_null_clears_optional_fields() {
        let mut t = task(TaskStatus::Pending, TaskPriority::Low, Some("Assam"));
        t.assigned_to = Some("Field Team B".into());

        let update: UpdateTask = serde_json::from_str(r#"{"assigned_to": null}"#).unwrap();
        assert_eq!(update.assigned_to, Some(None));
        assert_eq!(update.state, None);
        assert!(!update.is_empty());
        assert!(update.validate().is_ok());

        update.apply(&mut t);
        assert_eq!(t.assigned_to, None);
        assert_eq!(t.state.as_deref(), Some("Assam"));
    }

    #[test]
    fn update_enforces_length_on_present_values() {
        let long = "x".repeat(101);
        let update: UpdateTask =
            serde_json::from_str(&format!(r#"{{"state": "{}"}}"#, long)).unwrap();
        assert!(update.validate().is_err());
    }

    #[test]
    fn filter_matches_all_given_fields() {
        let t = task(TaskStatus::InProgress, TaskPriority::High, Some("Bihar"));
        let filter = TaskFilter {
            status: Some("in_progress".into()),
            priority: Some("high".into()),
            state: Some("Bihar".into()),
        };
        assert!(filter.matches(&t));
        assert!(!TaskFilter { state: Some("Delhi".into()), ..Default::default() }.matches(&t));

        let blank = TaskFilter { status: Some(String::new()), ..Default::default() }.normalized();
        assert!(blank.matches(&t));
    }

    #[test]
    fn stats_count_by_status_and_priority() {
        let tasks = vec![
            task(TaskStatus::Pending, TaskPriority::High, None),
            task(TaskStatus::Pending, TaskPriority::Critical, None),
            task(TaskStatus::Done, TaskPriority::High, None),
        ];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.in_progress, 0);
        assert_eq!(stats.done, 1);
        assert_eq!(stats.by_priority.high, 2);
        assert_eq!(stats.by_priority.critical, 1);
    }

    #[test]
    fn row_with_unknown_status_is_rejected() {
        let now = Utc::now();
        let row = TaskRow {
            id: 7,
            title: "x".into(),
            description: None,
            status: "archived".into(),
            priority: "low".into(),
            state: None,
            anomaly_type: None,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        };
        assert!(Task::try_from(row).is_err());
    }
}
