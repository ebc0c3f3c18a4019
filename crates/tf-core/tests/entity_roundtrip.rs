//! Serde roundtrip and JsonSchema validation tests for persisted and rendered types.

use chrono::{TimeDelta, Utc};
use schemars::schema_for;
use tf_core::durations::TimeRemaining;
use tf_core::entities::*;
use tf_core::enums::*;
use tf_core::identity::SessionIdentity;
use tf_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_task() -> Task {
    let now = Utc::now();
    Task {
        id: "tsk-3fa85f6457174562".into(),
        title: "Write report".into(),
        description: "Quarterly numbers".into(),
        deadline: now + TimeDelta::hours(1),
        priority: Priority::High,
        assigned_to: "usr-00aa11bb22cc33dd".into(),
        assigned_by: Some("usr-ffeeddccbbaa9988".into()),
        assigned_by_name: Some("Ada".into()),
        status: TaskStatus::Paused,
        time_spent: 300,
        created_at: now,
        started_at: Some(now),
        completed_at: None,
    }
}

fn sample_user() -> User {
    User {
        id: "usr-00aa11bb22cc33dd".into(),
        name: "Grace".into(),
        email: "grace@example.com".into(),
        password: "hunter2".into(),
        role: UserRole::Employee,
        department: "Engineering".into(),
        position: "Developer".into(),
        created_at: Utc::now(),
        created_by: Some("usr-ffeeddccbbaa9988".into()),
    }
}

roundtrip_and_validate!(task_roundtrip, Task, sample_task());

roundtrip_and_validate!(
    completed_task_roundtrip,
    Task,
    Task {
        status: TaskStatus::Completed,
        completed_at: Some(Utc::now()),
        ..sample_task()
    }
);

roundtrip_and_validate!(
    new_task_roundtrip,
    NewTask,
    NewTask::new("Review PR", Utc::now(), "usr-00aa11bb22cc33dd").priority(Priority::Low)
);

roundtrip_and_validate!(user_roundtrip, User, sample_user());

roundtrip_and_validate!(profile_roundtrip, UserProfile, sample_user().profile());

roundtrip_and_validate!(
    new_employee_roundtrip,
    NewEmployee,
    NewEmployee {
        name: "Linus".into(),
        email: "linus@example.com".into(),
        password: "secret".into(),
        department: "Kernel".into(),
        position: "Maintainer".into(),
    }
);

roundtrip_and_validate!(
    identity_roundtrip,
    SessionIdentity,
    SessionIdentity::new("usr-ffeeddccbbaa9988", UserRole::Admin).with_name("Ada")
);

roundtrip_and_validate!(
    stats_roundtrip,
    TaskStats,
    TaskStats {
        total: 4,
        pending: 1,
        in_progress: 1,
        paused: 1,
        completed: 1,
        overdue: 2,
    }
);

roundtrip_and_validate!(
    employee_summary_roundtrip,
    EmployeeSummary,
    EmployeeSummary {
        employee: sample_user().profile(),
        total: 3,
        active: 1,
        completed: 2,
    }
);

roundtrip_and_validate!(
    board_entry_roundtrip,
    BoardEntry,
    BoardEntry {
        employee_name: "Grace".into(),
        running: true,
        task: sample_task(),
    }
);

roundtrip_and_validate!(
    dashboard_roundtrip,
    DashboardResponse,
    DashboardResponse {
        user_id: "usr-00aa11bb22cc33dd".into(),
        stats: TaskStats::default(),
        recent_tasks: vec![sample_task()],
    }
);

roundtrip_and_validate!(
    remaining_roundtrip,
    RemainingResponse,
    RemainingResponse {
        deadline: Utc::now(),
        remaining: "1h 30m remaining".into(),
        detail: TimeRemaining::Hours {
            hours: 1,
            minutes: 30,
        },
    }
);

// --- Rendering guarantees ---

#[test]
fn profile_never_carries_credential() {
    let json = serde_json::to_value(sample_user().profile()).unwrap();
    assert!(json.get("password").is_none());
}

#[test]
fn board_entry_flattens_task_fields() {
    let entry = BoardEntry {
        employee_name: "Grace".into(),
        running: false,
        task: sample_task(),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["title"], "Write report");
    assert_eq!(json["employee_name"], "Grace");
}

// --- Schema rejection tests ---

#[test]
fn schema_rejects_task_without_deadline() {
    let schema = serde_json::to_value(schema_for!(Task)).unwrap();
    let invalid = serde_json::json!({
        "id": "tsk-test",
        "title": "No deadline",
        "assigned_to": "usr-1",
        "status": "pending",
        "created_at": "2026-02-08T12:00:00Z"
    });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(!errors.is_empty(), "Should reject task without 'deadline'");
}

#[test]
fn schema_rejects_invalid_status_value() {
    let schema = serde_json::to_value(schema_for!(Task)).unwrap();
    let invalid = serde_json::json!({
        "id": "tsk-test",
        "title": "Bad status",
        "deadline": "2026-02-09T12:00:00Z",
        "assigned_to": "usr-1",
        "status": "in-flight",
        "created_at": "2026-02-08T12:00:00Z"
    });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(!errors.is_empty(), "Should reject invalid status value");
}
