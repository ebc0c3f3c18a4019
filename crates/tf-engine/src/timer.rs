//! Timer engine: one running-timer record per task.
//!
//! Each handle keeps the wall-clock instant the run began and a checkpoint up
//! to which elapsed time has already been credited to the task. Crediting
//! always moves the checkpoint by exactly the whole seconds credited, so the
//! sub-second remainder carries over and the credits of a run always add up
//! to `floor(stop - start)`.
//!
//! The engine never touches a task's status; that belongs to the lifecycle
//! controller.

use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use tf_core::clock::elapsed_secs;
use tf_core::entities::Task;
use tokio_util::sync::CancellationToken;

/// Outcome of a start request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStart {
    /// A new run began.
    Started,
    /// A timer was already running for the task; nothing changed.
    AlreadyRunning,
    /// The task is completed; nothing changed.
    Rejected,
}

impl TimerStart {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::AlreadyRunning => "already_running",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for TimerStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory record of one running timer.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    started_at: DateTime<Utc>,
    accrued_until: DateTime<Utc>,
    cancel: CancellationToken,
}

impl TimerHandle {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            started_at: now,
            accrued_until: now,
            cancel: CancellationToken::new(),
        }
    }

    /// Whole seconds elapsed since the last credit.
    #[must_use]
    pub fn unaccrued_secs(&self, now: DateTime<Utc>) -> u64 {
        elapsed_secs(self.accrued_until, now)
    }

    fn take_credit(&mut self, now: DateTime<Utc>) -> u64 {
        let secs = self.unaccrued_secs(now);
        // Saturates only beyond i64::MAX seconds.
        self.accrued_until += TimeDelta::seconds(i64::try_from(secs).unwrap_or(i64::MAX));
        secs
    }
}

/// Running timers keyed by task id. At most one per task.
#[derive(Debug, Default)]
pub struct TimerEngine {
    handles: HashMap<String, TimerHandle>,
}

impl TimerEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_running(&self, id: &str) -> bool {
        self.handles.contains_key(id)
    }

    /// Ids of every running timer, sorted.
    #[must_use]
    pub fn running_ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.handles.keys().cloned().collect();
        ids.sort();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Begin a run for `id` at `now`.
    ///
    /// Returns the run's cancellation token, or `None` if a timer is already
    /// running for this id.
    pub fn start(&mut self, id: &str, now: DateTime<Utc>) -> Option<CancellationToken> {
        if self.is_running(id) {
            return None;
        }
        let handle = TimerHandle::new(now);
        let token = handle.cancel.clone();
        self.handles.insert(id.to_string(), handle);
        Some(token)
    }

    /// Credit the seconds elapsed since the last checkpoint to `task`.
    ///
    /// Returns the seconds credited, or `None` if no timer runs for the task.
    pub fn accrue(&mut self, task: &mut Task, now: DateTime<Utc>) -> Option<u64> {
        let handle = self.handles.get_mut(&task.id)?;
        let secs = handle.take_credit(now);
        task.time_spent = task.time_spent.saturating_add(secs);
        Some(secs)
    }

    /// End the run for `task`, crediting whatever is left.
    ///
    /// The handle is removed and its token cancelled before the remainder is
    /// computed. Returns the run's total elapsed whole seconds, or `None` if
    /// no timer runs for the task.
    pub fn stop(&mut self, task: &mut Task, now: DateTime<Utc>) -> Option<u64> {
        let mut handle = self.handles.remove(&task.id)?;
        handle.cancel.cancel();
        let secs = handle.take_credit(now);
        task.time_spent = task.time_spent.saturating_add(secs);
        Some(elapsed_secs(handle.started_at, now))
    }

    /// Drop the run for `id` without crediting anything.
    pub fn cancel(&mut self, id: &str) -> bool {
        match self.handles.remove(id) {
            Some(handle) => {
                handle.cancel.cancel();
                true
            }
            None => false,
        }
    }

    /// Whole seconds not yet credited for `id`; zero when nothing runs.
    #[must_use]
    pub fn unaccrued_secs(&self, id: &str, now: DateTime<Utc>) -> u64 {
        self.handles
            .get(id)
            .map_or(0, |handle| handle.unaccrued_secs(now))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use tf_core::entities::NewTask;

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    fn task() -> Task {
        Task::from_new(
            "tsk-0000000000000001".into(),
            NewTask::new("Write report", t0() + TimeDelta::hours(2), "usr-1"),
            t0(),
        )
    }

    #[test]
    fn start_twice_is_refused() {
        let mut engine = TimerEngine::new();
        assert!(engine.start("tsk-a", t0()).is_some());
        assert!(engine.start("tsk-a", t0()).is_none());
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn stop_credits_full_elapsed() {
        let mut engine = TimerEngine::new();
        let mut task = task();
        let token = engine.start(&task.id, t0()).unwrap();

        let total = engine.stop(&mut task, t0() + TimeDelta::seconds(300));
        assert_eq!(total, Some(300));
        assert_eq!(task.time_spent, 300);
        assert!(token.is_cancelled());
        assert!(!engine.is_running(&task.id));
    }

    #[test]
    fn stop_without_timer_is_none() {
        let mut engine = TimerEngine::new();
        let mut task = task();
        assert_eq!(engine.stop(&mut task, t0()), None);
        assert_eq!(task.time_spent, 0);
    }

    #[test]
    fn credits_sum_to_floor_of_run() {
        let mut engine = TimerEngine::new();
        let mut task = task();
        engine.start(&task.id, t0()).unwrap();

        let step = TimeDelta::milliseconds(30_700);
        let mut now = t0();
        let mut credited = 0;
        for _ in 0..5 {
            now += step;
            credited += engine.accrue(&mut task, now).unwrap();
        }
        now += TimeDelta::milliseconds(900);
        let total = engine.stop(&mut task, now).unwrap();

        // 5 * 30.7 + 0.9 = 154.4
        assert_eq!(total, 154);
        assert_eq!(task.time_spent, 154);
        assert!(credited <= 154);
    }

    #[test]
    fn unaccrued_tracks_checkpoint() {
        let mut engine = TimerEngine::new();
        let mut task = task();
        engine.start(&task.id, t0()).unwrap();

        engine.accrue(&mut task, t0() + TimeDelta::seconds(30));
        assert_eq!(engine.unaccrued_secs(&task.id, t0() + TimeDelta::seconds(45)), 15);
        assert_eq!(engine.unaccrued_secs("tsk-other", t0()), 0);
    }

    #[test]
    fn cancel_credits_nothing() {
        let mut engine = TimerEngine::new();
        let token = engine.start("tsk-a", t0()).unwrap();
        assert!(engine.cancel("tsk-a"));
        assert!(token.is_cancelled());
        assert!(!engine.cancel("tsk-a"));
        assert!(engine.is_empty());
    }

    #[test]
    fn clock_moving_backwards_credits_zero() {
        let mut engine = TimerEngine::new();
        let mut task = task();
        engine.start(&task.id, t0()).unwrap();
        assert_eq!(engine.accrue(&mut task, t0() - TimeDelta::seconds(10)), Some(0));
        assert_eq!(task.time_spent, 0);
    }
}
