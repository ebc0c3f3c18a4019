//! Task lifecycle controller.
//!
//! `TaskService` owns the task store and the timer engine behind one async
//! mutex, so every mutation (including periodic ticks) is serialized. It is
//! built once at startup and shared by reference; there is no global
//! instance.

use std::path::Path;
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tf_config::TaskflowConfig;
use tf_core::clock::{Clock, SystemClock};
use tf_core::durations::TimeRemaining;
use tf_core::entities::{NewTask, Task};
use tf_core::enums::TaskStatus;
use tf_core::errors::CoreError;
use tf_core::ids::{PREFIX_TASK, generate_id};
use tf_core::responses::TaskStats;
use tf_store::updates::task::TaskUpdate;
use tf_store::{JsonlFile, TaskStore};
use tokio::sync::Mutex;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::filter::TaskFilter;
use crate::stats;
use crate::timer::{TimerEngine, TimerStart};

/// Default period between accrual ticks of a running timer.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(30);

/// Store and timers, always locked together.
#[derive(Debug)]
struct Tracker {
    store: TaskStore,
    timers: TimerEngine,
}

impl Tracker {
    fn task(&self, id: &str) -> Result<&Task, CoreError> {
        self.store.get(id).ok_or_else(|| CoreError::task_not_found(id))
    }

    /// Credit a running timer up to `now` and persist if anything changed.
    fn tick(&mut self, id: &str, now: DateTime<Utc>) {
        let Some(task) = self.store.get_mut(id) else {
            self.timers.cancel(id);
            return;
        };
        match self.timers.accrue(task, now) {
            Some(0) | None => {}
            Some(secs) => {
                tracing::debug!(task = %id, secs, total = task.time_spent, "accrued");
                self.store.persist();
            }
        }
    }
}

/// Orchestrates task mutations and timer runs.
pub struct TaskService {
    state: Arc<Mutex<Tracker>>,
    clock: Arc<dyn Clock>,
    tick_interval: Duration,
}

impl TaskService {
    /// Create a service over `store` driven by `clock`.
    #[must_use]
    pub fn new(store: TaskStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(Mutex::new(Tracker {
                store,
                timers: TimerEngine::new(),
            })),
            clock,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }

    /// Override the period between accrual ticks.
    #[must_use]
    pub const fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Open the JSONL task store configured for the project rooted at
    /// `root`, on the system clock.
    #[must_use]
    pub fn open(config: &TaskflowConfig, root: &Path) -> Self {
        let backend = JsonlFile::new(config.storage.tasks_path(root));
        Self::new(TaskStore::load(Box::new(backend)), Arc::new(SystemClock))
            .with_tick_interval(config.timer.tick_interval())
    }

    /// Current time according to the injected clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Create a pending task and persist it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError` if an id cannot be generated.
    pub async fn add_task(&self, fields: NewTask) -> Result<Task, CoreError> {
        let task = Task::from_new(generate_id(PREFIX_TASK)?, fields, self.clock.now());
        let mut state = self.state.lock().await;
        state.store.insert(task.clone());
        tracing::debug!(task = %task.id, assignee = %task.assigned_to, "task added");
        Ok(task)
    }

    /// Shallow-merge `update` into a task.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id.
    pub async fn update_task(&self, id: &str, update: &TaskUpdate) -> Result<Task, CoreError> {
        let mut state = self.state.lock().await;
        let task = state.store.apply(id, update)?;
        tracing::debug!(task = %id, "task updated");
        Ok(task)
    }

    /// Remove a task, cancelling its timer first.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id.
    pub async fn delete_task(&self, id: &str) -> Result<(), CoreError> {
        let mut state = self.state.lock().await;
        state.task(id)?;
        if state.timers.cancel(id) {
            tracing::debug!(task = %id, "cancelled timer of deleted task");
        }
        state.store.remove(id)?;
        tracing::debug!(task = %id, "task deleted");
        Ok(())
    }

    /// Start timing a task.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id.
    pub async fn start_timer(&self, id: &str) -> Result<TimerStart, CoreError> {
        let mut state = self.state.lock().await;
        let status = state.task(id)?.status;

        if state.timers.is_running(id) {
            return Ok(TimerStart::AlreadyRunning);
        }
        if status.is_terminal() {
            tracing::warn!(task = %id, %status, "refusing to start timer");
            return Ok(TimerStart::Rejected);
        }

        let now = self.clock.now();
        let Some(token) = state.timers.start(id, now) else {
            return Ok(TimerStart::AlreadyRunning);
        };
        state.store.update(id, |task| {
            task.status = TaskStatus::InProgress;
            task.started_at.get_or_insert(now);
        })?;
        drop(state);

        self.spawn_ticker(id.to_string(), token);
        tracing::debug!(task = %id, "timer started");
        Ok(TimerStart::Started)
    }

    /// Stop timing a task and pause it.
    ///
    /// Returns the run's total elapsed whole seconds, or `None` if no timer
    /// was running.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id.
    pub async fn stop_timer(&self, id: &str) -> Result<Option<u64>, CoreError> {
        let mut state = self.state.lock().await;
        state.task(id)?;
        if !state.timers.is_running(id) {
            return Ok(None);
        }

        let now = self.clock.now();
        let Tracker { store, timers } = &mut *state;
        let mut elapsed = None;
        store.update(id, |task| {
            elapsed = timers.stop(task, now);
            task.status = TaskStatus::Paused;
        })?;
        tracing::debug!(task = %id, ?elapsed, "timer stopped");
        Ok(elapsed)
    }

    /// Mark a task completed, folding in any running timer first.
    ///
    /// Completing an already-completed task returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for an unknown id.
    pub async fn complete_task(&self, id: &str) -> Result<Task, CoreError> {
        let mut state = self.state.lock().await;
        let current = state.task(id)?;
        if current.status.is_terminal() {
            return Ok(current.clone());
        }

        let now = self.clock.now();
        let Tracker { store, timers } = &mut *state;
        let task = store.update(id, |task| {
            if let Some(elapsed) = timers.stop(task, now) {
                tracing::debug!(task = %task.id, elapsed, "timer stopped on completion");
            }
            task.status = TaskStatus::Completed;
            task.completed_at = Some(now);
        })?;
        tracing::debug!(task = %id, time_spent = task.time_spent, "task completed");
        Ok(task)
    }

    /// Credit every running timer up to now. Returns how many were credited.
    pub async fn flush_timers(&self) -> usize {
        let now = self.clock.now();
        let mut state = self.state.lock().await;
        let ids = state.timers.running_ids();
        for id in &ids {
            state.tick(id, now);
        }
        ids.len()
    }

    /// Stop every running timer, pausing its task. Returns how many were
    /// stopped.
    pub async fn shutdown(&self) -> usize {
        let now = self.clock.now();
        let mut state = self.state.lock().await;
        let Tracker { store, timers } = &mut *state;
        let ids = timers.running_ids();
        for id in &ids {
            match store.get_mut(id) {
                Some(task) => {
                    timers.stop(task, now);
                    task.status = TaskStatus::Paused;
                }
                None => {
                    timers.cancel(id);
                }
            }
        }
        if !ids.is_empty() {
            store.persist();
            tracing::debug!(count = ids.len(), "stopped running timers");
        }
        ids.len()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub async fn get_task(&self, id: &str) -> Option<Task> {
        self.state.lock().await.store.get(id).cloned()
    }

    /// Tasks assigned to `user_id`, in creation order.
    pub async fn tasks_for(&self, user_id: &str) -> Vec<Task> {
        self.state.lock().await.store.by_assignee(user_id)
    }

    pub async fn all_tasks(&self) -> Vec<Task> {
        self.state.lock().await.store.all().to_vec()
    }

    pub async fn is_running(&self, id: &str) -> bool {
        self.state.lock().await.timers.is_running(id)
    }

    pub async fn running_ids(&self) -> Vec<String> {
        self.state.lock().await.timers.running_ids()
    }

    /// Stored time plus the not-yet-credited seconds of a running timer.
    pub async fn live_time_spent(&self, id: &str) -> Option<u64> {
        let now = self.clock.now();
        let state = self.state.lock().await;
        let task = state.store.get(id)?;
        Some(task.time_spent.saturating_add(state.timers.unaccrued_secs(id, now)))
    }

    pub async fn task_stats(&self, user_id: &str) -> TaskStats {
        let tasks = self.tasks_for(user_id).await;
        stats::task_stats(&tasks, self.clock.now())
    }

    /// The last `limit` tasks of `user_id`, newest first.
    pub async fn recent_tasks(&self, user_id: &str, limit: usize) -> Vec<Task> {
        stats::recent_tasks(&self.tasks_for(user_id).await, limit)
    }

    /// Tasks matching `filter`, optionally restricted to one assignee.
    pub async fn filter_tasks(&self, user_id: Option<&str>, filter: &TaskFilter) -> Vec<Task> {
        let tasks = match user_id {
            Some(user_id) => self.tasks_for(user_id).await,
            None => self.all_tasks().await,
        };
        filter.apply(tasks)
    }

    /// Time left until `deadline`, measured from the injected clock.
    #[must_use]
    pub fn time_remaining(&self, deadline: DateTime<Utc>) -> TimeRemaining {
        TimeRemaining::between(deadline, self.clock.now())
    }

    // ------------------------------------------------------------------
    // Ticker
    // ------------------------------------------------------------------

    fn spawn_ticker(&self, id: String, cancel: CancellationToken) {
        let state = Arc::downgrade(&self.state);
        let clock = Arc::clone(&self.clock);
        let period = self.tick_interval;
        tokio::spawn(run_ticker(state, clock, period, id, cancel));
    }
}

impl std::fmt::Debug for TaskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskService")
            .field("tick_interval", &self.tick_interval)
            .finish_non_exhaustive()
    }
}

/// Credit a running timer every `period` until its token is cancelled or the
/// service is dropped.
async fn run_ticker(
    state: Weak<Mutex<Tracker>>,
    clock: Arc<dyn Clock>,
    period: Duration,
    id: String,
    cancel: CancellationToken,
) {
    let mut ticks = tokio::time::interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            () = cancel.cancelled() => break,
            _ = ticks.tick() => {
                let Some(state) = state.upgrade() else { break };
                let mut tracker = state.lock().await;
                // A stop may have won the lock while this tick waited.
                if cancel.is_cancelled() {
                    break;
                }
                tracker.tick(&id, clock.now());
            }
        }
    }
    tracing::trace!(task = %id, "ticker exited");
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};
    use pretty_assertions::assert_eq;
    use tf_core::clock::ManualClock;

    use super::*;

    const TICK: Duration = Duration::from_secs(30);

    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn tick_queued_behind_stop_credits_nothing() {
        let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let clock = ManualClock::new(t0);
        let service = Arc::new(
            TaskService::new(TaskStore::in_memory(), Arc::new(clock.clone()))
                .with_tick_interval(TICK),
        );
        let task = service
            .add_task(NewTask::new("Write report", t0 + TimeDelta::hours(1), "u1"))
            .await
            .unwrap();
        service.start_timer(&task.id).await.unwrap();
        settle().await;
        assert_eq!(Arc::weak_count(&service.state), 1);

        let guard = service.state.lock().await;
        let stopper = tokio::spawn({
            let service = Arc::clone(&service);
            let id = task.id.clone();
            async move { service.stop_timer(&id).await }
        });
        settle().await;

        // The tick fires while the stop is already waiting on the lock.
        clock.advance_secs(30);
        tokio::time::advance(TICK).await;
        settle().await;
        drop(guard);

        assert_eq!(stopper.await.unwrap().unwrap(), Some(30));
        settle().await;
        assert_eq!(Arc::weak_count(&service.state), 0);

        clock.advance_secs(60);
        tokio::time::advance(TICK * 2).await;
        settle().await;

        let stored = service.get_task(&task.id).await.unwrap();
        assert_eq!(stored.time_spent, 30);
        assert_eq!(stored.status, TaskStatus::Paused);
        assert!(!service.is_running(&task.id).await);
    }
}
