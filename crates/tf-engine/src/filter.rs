//! Status and free-text filtering for task lists.

use tf_core::entities::Task;
use tf_core::enums::TaskStatus;

/// Criteria for narrowing a task list. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    /// Case-insensitive substring of the title or description.
    pub search: Option<String>,
}

impl TaskFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = (!term.trim().is_empty()).then_some(term);
        self
    }

    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if self.status.is_some_and(|status| task.status != status) {
            return false;
        }
        self.search.as_deref().is_none_or(|term| {
            let term = term.trim().to_lowercase();
            task.title.to_lowercase().contains(&term)
                || task.description.to_lowercase().contains(&term)
        })
    }

    /// Keep the matching tasks, preserving order.
    #[must_use]
    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        tasks.into_iter().filter(|t| self.matches(t)).collect()
    }
}
