//! Periodic accrual of running timers under paused tokio time.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use pretty_assertions::assert_eq;
use tf_core::clock::ManualClock;
use tf_core::entities::NewTask;
use tf_engine::TaskService;
use tf_store::{MemoryBackend, TaskStore};

const TICK: Duration = Duration::from_secs(30);

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

fn service() -> (TaskService, ManualClock, MemoryBackend) {
    let clock = ManualClock::new(t0());
    let backend = MemoryBackend::new();
    let store = TaskStore::load(Box::new(backend.clone()));
    let service = TaskService::new(store, Arc::new(clock.clone())).with_tick_interval(TICK);
    (service, clock, backend)
}

/// Let spawned tickers run until they block again.
async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

/// Move both the wall clock and tokio time forward.
async fn elapse(clock: &ManualClock, wall: TimeDelta, tokio_time: Duration) {
    clock.advance(wall);
    tokio::time::advance(tokio_time).await;
    settle().await;
}

async fn time_spent(service: &TaskService, id: &str) -> u64 {
    service.get_task(id).await.unwrap().time_spent
}

#[tokio::test(start_paused = true)]
async fn ticks_credit_whole_seconds_without_double_counting() {
    let (service, clock, backend) = service();
    let task = service
        .add_task(NewTask::new("Write report", t0() + TimeDelta::hours(1), "u1"))
        .await
        .unwrap();
    service.start_timer(&task.id).await.unwrap();
    settle().await;

    elapse(&clock, TimeDelta::milliseconds(30_500), TICK + Duration::from_secs(1)).await;
    assert_eq!(time_spent(&service, &task.id).await, 30);
    let persisted = TaskStore::load(Box::new(backend.clone()));
    assert_eq!(persisted.get(&task.id).unwrap().time_spent, 30);

    elapse(&clock, TimeDelta::milliseconds(30_500), TICK).await;
    assert_eq!(time_spent(&service, &task.id).await, 61);

    clock.advance(TimeDelta::milliseconds(4_700));
    assert_eq!(service.live_time_spent(&task.id).await, Some(65));
    assert_eq!(service.stop_timer(&task.id).await.unwrap(), Some(65));
    assert_eq!(time_spent(&service, &task.id).await, 65);

    elapse(&clock, TimeDelta::seconds(120), TICK * 4).await;
    assert_eq!(time_spent(&service, &task.id).await, 65);
}

#[tokio::test(start_paused = true)]
async fn deleted_task_gets_no_further_ticks() {
    let (service, clock, backend) = service();
    let keep = service
        .add_task(NewTask::new("Keep", t0() + TimeDelta::hours(1), "u1"))
        .await
        .unwrap();
    let doomed = service
        .add_task(NewTask::new("Doomed", t0() + TimeDelta::hours(1), "u1"))
        .await
        .unwrap();
    service.start_timer(&doomed.id).await.unwrap();
    settle().await;

    elapse(&clock, TimeDelta::seconds(10), Duration::from_secs(10)).await;
    service.delete_task(&doomed.id).await.unwrap();
    elapse(&clock, TimeDelta::seconds(120), TICK * 4).await;

    assert_eq!(service.tasks_for("u1").await, vec![keep.clone()]);
    assert!(service.running_ids().await.is_empty());
    assert_eq!(TaskStore::load(Box::new(backend)).all(), &[keep]);
}

#[tokio::test(start_paused = true)]
async fn completion_after_ticks_totals_wall_time() {
    let (service, clock, _) = service();
    let task = service
        .add_task(NewTask::new("Ship", t0() + TimeDelta::hours(1), "u1"))
        .await
        .unwrap();
    service.start_timer(&task.id).await.unwrap();
    settle().await;

    for _ in 0..3 {
        elapse(&clock, TimeDelta::seconds(30), TICK + Duration::from_millis(10)).await;
    }
    clock.advance_secs(7);
    let done = service.complete_task(&task.id).await.unwrap();
    assert_eq!(done.time_spent, 97);
}
