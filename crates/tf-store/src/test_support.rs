//! Shared test utilities for tf-store tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};
    use tf_core::entities::{NewTask, Task};
    use tf_core::enums::UserRole;
    use tf_core::identity::SessionIdentity;
    use tf_core::ids::{PREFIX_TASK, generate_id};

    use crate::backend::MemoryBackend;
    use crate::task_store::TaskStore;

    /// A fixed instant so timestamps in assertions are stable.
    pub fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    /// A pending task assigned to `assignee`, due one hour after `fixed_now`.
    pub fn sample_task(assignee: &str) -> Task {
        let fields = NewTask::new("Write report", fixed_now() + TimeDelta::hours(1), assignee)
            .description("Quarterly numbers");
        Task::from_new(generate_id(PREFIX_TASK).unwrap(), fields, fixed_now())
    }

    /// An empty store over a fresh memory slot; the slot is returned for inspection.
    pub fn memory_store() -> (TaskStore, MemoryBackend) {
        let backend = MemoryBackend::new();
        let store = TaskStore::load(Box::new(backend.clone()));
        (store, backend)
    }

    pub fn admin() -> SessionIdentity {
        SessionIdentity::new("usr-admin", UserRole::Admin).with_name("Ada")
    }

    pub fn employee() -> SessionIdentity {
        SessionIdentity::new("usr-staff", UserRole::Employee)
    }
}
