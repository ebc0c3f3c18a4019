use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Priority, TaskStatus};

/// A unit of assigned work with a deadline, a priority, and accrued time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    pub priority: Priority,
    pub assigned_to: String,
    #[serde(default)]
    pub assigned_by: Option<String>,
    #[serde(default)]
    pub assigned_by_name: Option<String>,
    pub status: TaskStatus,
    /// Cumulative working time in whole seconds.
    #[serde(default)]
    pub time_spent: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Build a fresh pending task from creation fields.
    #[must_use]
    pub fn from_new(id: String, fields: NewTask, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            deadline: fields.deadline,
            priority: fields.priority,
            assigned_to: fields.assigned_to,
            assigned_by: fields.assigned_by,
            assigned_by_name: fields.assigned_by_name,
            status: TaskStatus::Pending,
            time_spent: 0,
            created_at: now,
            started_at: None,
            completed_at: None,
        }
    }

    /// Deadline has passed and the task is not completed.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Completed && self.deadline < now
    }

    /// Check the status/timestamp invariants of a task record.
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        let completed = self.status == TaskStatus::Completed;
        let entered_progress = self.status == TaskStatus::InProgress || self.status == TaskStatus::Paused;
        completed == self.completed_at.is_some() && (!entered_progress || self.started_at.is_some())
    }
}

/// Fields supplied when creating a task.
///
/// `title`, `deadline`, and `assigned_to` are required by the form layer;
/// empty strings are stored as given.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    pub priority: Priority,
    pub assigned_to: String,
    #[serde(default)]
    pub assigned_by: Option<String>,
    #[serde(default)]
    pub assigned_by_name: Option<String>,
}

impl NewTask {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        deadline: DateTime<Utc>,
        assigned_to: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            deadline,
            priority: Priority::default(),
            assigned_to: assigned_to.into(),
            assigned_by: None,
            assigned_by_name: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Record who assigned the task.
    #[must_use]
    pub fn assigned_by(mut self, id: impl Into<String>, name: Option<String>) -> Self {
        self.assigned_by = Some(id.into());
        self.assigned_by_name = name;
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn from_new_starts_pending_with_no_time() {
        let fields = NewTask::new("Write report", now() + TimeDelta::hours(1), "usr-1")
            .priority(Priority::High)
            .assigned_by("usr-admin", Some("Ada".into()));
        let task = Task::from_new("tsk-1".into(), fields, now());

        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.time_spent, 0);
        assert_eq!(task.created_at, now());
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.assigned_by.as_deref(), Some("usr-admin"));
        assert_eq!(task.assigned_by_name.as_deref(), Some("Ada"));
        assert!(task.started_at.is_none());
        assert!(task.completed_at.is_none());
        assert!(task.invariants_hold());
    }

    #[test]
    fn overdue_requires_past_deadline_and_open_status() {
        let mut task = Task::from_new(
            "tsk-1".into(),
            NewTask::new("Late", now() - TimeDelta::minutes(1), "usr-1"),
            now() - TimeDelta::days(1),
        );
        assert!(task.is_overdue(now()));

        task.status = TaskStatus::Completed;
        task.completed_at = Some(now());
        assert!(!task.is_overdue(now()));
    }

    #[test]
    fn deadline_equal_to_now_is_not_overdue() {
        let task = Task::from_new("tsk-1".into(), NewTask::new("Edge", now(), "usr-1"), now());
        assert!(!task.is_overdue(now()));
    }

    #[test]
    fn missing_optional_fields_deserialize_with_defaults() {
        let json = r#"{
            "id": "tsk-1",
            "title": "Legacy",
            "deadline": "2026-03-02T00:00:00Z",
            "assigned_to": "usr-1",
            "status": "pending",
            "created_at": "2026-03-01T00:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.time_spent, 0);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.description.is_empty());
        assert!(task.started_at.is_none());
    }
}
