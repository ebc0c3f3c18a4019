//! Task update builder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tf_core::entities::Task;
use tf_core::enums::Priority;

/// Shallow patch for a task's editable fields.
///
/// Status, timestamps, and provenance are owned by the lifecycle and cannot
/// be patched. `time_spent` can be overridden explicitly; that is the only way
/// it ever decreases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<u64>,
}

impl TaskUpdate {
    /// True when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.deadline.is_none()
            && self.priority.is_none()
            && self.assigned_to.is_none()
            && self.time_spent.is_none()
    }

    /// Merge the `Some` fields into `task`.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(ref title) = self.title {
            task.title.clone_from(title);
        }
        if let Some(ref description) = self.description {
            task.description.clone_from(description);
        }
        if let Some(deadline) = self.deadline {
            task.deadline = deadline;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(ref assigned_to) = self.assigned_to {
            task.assigned_to.clone_from(assigned_to);
        }
        if let Some(time_spent) = self.time_spent {
            task.time_spent = time_spent;
        }
    }
}

pub struct TaskUpdateBuilder(TaskUpdate);

impl TaskUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TaskUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.0.deadline = Some(deadline);
        self
    }

    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn assigned_to(mut self, user_id: impl Into<String>) -> Self {
        self.0.assigned_to = Some(user_id.into());
        self
    }

    #[must_use]
    pub const fn time_spent(mut self, secs: u64) -> Self {
        self.0.time_spent = Some(secs);
        self
    }

    #[must_use]
    pub fn build(self) -> TaskUpdate {
        self.0
    }
}

impl Default for TaskUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
