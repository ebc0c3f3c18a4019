//! Read-only projections over task collections.
//!
//! Every function here is pure: callers pass the tasks and the instant to
//! evaluate against.

use chrono::{DateTime, Utc};
use tf_core::entities::{Task, User};
use tf_core::enums::{TaskStatus, UserRole};
use tf_core::responses::{BoardEntry, EmployeeSummary, TaskStats};

/// Name shown on the board for tasks whose assignee is not on the roster.
pub const UNKNOWN_EMPLOYEE: &str = "Unknown";

/// Count tasks per status, plus the non-completed ones past their deadline.
#[must_use]
pub fn task_stats(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
    tasks.iter().fold(TaskStats::default(), |mut stats, task| {
        stats.total += 1;
        match task.status {
            TaskStatus::Pending => stats.pending += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Paused => stats.paused += 1,
            TaskStatus::Completed => stats.completed += 1,
        }
        if task.is_overdue(now) {
            stats.overdue += 1;
        }
        stats
    })
}

/// The last `limit` tasks, newest first.
#[must_use]
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    tasks.iter().rev().take(limit).cloned().collect()
}

/// Per-employee task counts, in roster order. Admins are skipped.
#[must_use]
pub fn employee_summaries(users: &[User], tasks: &[Task]) -> Vec<EmployeeSummary> {
    users
        .iter()
        .filter(|u| u.role == UserRole::Employee)
        .map(|user| {
            let assigned = tasks.iter().filter(|t| t.assigned_to == user.id);
            let (total, active, completed) =
                assigned.fold((0, 0, 0), |(total, active, completed), task| {
                    (
                        total + 1,
                        active + usize::from(task.status == TaskStatus::InProgress),
                        completed + usize::from(task.status == TaskStatus::Completed),
                    )
                });
            EmployeeSummary {
                employee: user.profile(),
                total,
                active,
                completed,
            }
        })
        .collect()
}

/// Every task annotated with its assignee's name and whether a timer runs.
#[must_use]
pub fn task_board<F>(tasks: &[Task], users: &[User], is_running: F) -> Vec<BoardEntry>
where
    F: Fn(&str) -> bool,
{
    tasks
        .iter()
        .map(|task| BoardEntry {
            employee_name: users
                .iter()
                .find(|u| u.id == task.assigned_to)
                .map_or_else(|| UNKNOWN_EMPLOYEE.to_string(), |u| u.name.clone()),
            running: is_running(&task.id),
            task: task.clone(),
        })
        .collect()
}
