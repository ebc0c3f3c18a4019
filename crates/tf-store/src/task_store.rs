//! In-memory task collection with a persistence bridge.
//!
//! The store loads once at construction and saves the full collection after
//! every mutation. In-memory state is authoritative for the session: a failed
//! load starts empty, a failed save is logged and the mutation stands.

use tf_core::entities::Task;
use tf_core::errors::CoreError;

use crate::backend::{MemoryBackend, RecordBackend};
use crate::updates::task::TaskUpdate;

/// Ordered task collection owned by the lifecycle controller.
pub struct TaskStore {
    tasks: Vec<Task>,
    backend: Box<dyn RecordBackend<Task>>,
}

impl TaskStore {
    /// Load every task from `backend`.
    ///
    /// Missing data yields an empty store; malformed data is logged and also
    /// yields an empty store.
    #[must_use]
    pub fn load(backend: Box<dyn RecordBackend<Task>>) -> Self {
        let tasks = match backend.load() {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), source = %backend.describe(), "loaded tasks");
                tasks
            }
            Err(error) => {
                tracing::warn!(
                    %error,
                    source = %backend.describe(),
                    "task store unreadable; starting with no tasks"
                );
                Vec::new()
            }
        };
        Self { tasks, backend }
    }

    /// An empty store over a private memory slot.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryBackend::new()))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Every task in natural (insertion) order.
    #[must_use]
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks assigned to `user_id`, in natural order.
    #[must_use]
    pub fn by_assignee(&self, user_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.assigned_to == user_id)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task and persist.
    pub fn insert(&mut self, task: Task) {
        self.tasks.push(task);
        self.persist();
    }

    /// Swap the stored task for `task`, keeping its position. Returns the
    /// previous value.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no task has this id.
    pub fn replace(&mut self, id: &str, task: Task) -> Result<Task, CoreError> {
        let slot = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::task_not_found(id))?;
        let previous = std::mem::replace(slot, task);
        self.persist();
        Ok(previous)
    }

    /// Remove a task and persist.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no task has this id.
    pub fn remove(&mut self, id: &str) -> Result<Task, CoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::task_not_found(id))?;
        let removed = self.tasks.remove(index);
        self.persist();
        Ok(removed)
    }

    /// Mutate a task in place, persist, and return its new state.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no task has this id.
    pub fn update<F>(&mut self, id: &str, f: F) -> Result<Task, CoreError>
    where
        F: FnOnce(&mut Task),
    {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::task_not_found(id))?;
        f(task);
        let updated = task.clone();
        self.persist();
        Ok(updated)
    }

    /// Shallow-merge `update` into a task.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no task has this id.
    pub fn apply(&mut self, id: &str, update: &TaskUpdate) -> Result<Task, CoreError> {
        self.update(id, |task| update.apply_to(task))
    }

    /// Mutate a task in place without persisting. Callers batch several
    /// edits and call [`Self::persist`] once.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Save the full collection. Returns whether the write succeeded.
    pub fn persist(&self) -> bool {
        match self.backend.save(&self.tasks) {
            Ok(()) => true,
            Err(error) => {
                tracing::error!(
                    %error,
                    target = %self.backend.describe(),
                    "failed to persist tasks; keeping in-memory state"
                );
                false
            }
        }
    }
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks.len())
            .field("backend", &self.backend.describe())
            .finish()
    }
}
