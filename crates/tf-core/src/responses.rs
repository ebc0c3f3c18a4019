//! Aggregate and response types returned by the engine and rendered by
//! `taskflow` commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::durations::TimeRemaining;
use crate::entities::{Task, UserProfile};

/// Per-user task counts. The four status buckets partition `total`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub paused: usize,
    pub completed: usize,
    /// Not completed and past deadline. Overlaps the status buckets.
    pub overdue: usize,
}

impl TaskStats {
    /// Sum of the status buckets; always equals `total`.
    #[must_use]
    pub const fn partition_total(&self) -> usize {
        self.pending + self.in_progress + self.paused + self.completed
    }
}

/// Roster card for one employee.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EmployeeSummary {
    pub employee: UserProfile,
    pub total: usize,
    /// Tasks currently in progress.
    pub active: usize,
    pub completed: usize,
}

/// A task on the admin board, annotated with its assignee's name.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BoardEntry {
    pub employee_name: String,
    pub running: bool,
    #[serde(flatten)]
    pub task: Task,
}

/// Response from `taskflow dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardResponse {
    pub user_id: String,
    pub stats: TaskStats,
    pub recent_tasks: Vec<Task>,
}

/// Response from `taskflow remaining`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RemainingResponse {
    pub deadline: DateTime<Utc>,
    pub remaining: String,
    pub detail: TimeRemaining,
}

/// Response from `taskflow task track` once the run ends.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrackResponse {
    pub task: Task,
    pub elapsed_secs: u64,
    pub elapsed: String,
    pub time_spent: String,
}
