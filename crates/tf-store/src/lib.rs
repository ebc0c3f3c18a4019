//! # tf-store
//!
//! Persistence for TaskFlow: the task store owned by the lifecycle
//! controller and the employee roster owned by the auth collaborator.
//!
//! Both collections are loaded once and written back whole after each
//! mutation through a [`RecordBackend`]. Two backends ship here: one JSON
//! object per line in a file ([`JsonlFile`]) and a shared in-memory slot
//! ([`MemoryBackend`]) for tests and ephemeral sessions.
//!
//! Failure policy differs per collection:
//! - [`TaskStore`] keeps in-memory state authoritative. A failed save is
//!   logged and the mutation stands.
//! - [`EmployeeRoster`] saves before committing, so a failed save is
//!   returned to the caller and nothing changes.

pub mod backend;
pub mod error;
pub mod roster;
pub mod task_store;
pub mod updates;

mod test_support;

pub use backend::{JsonlFile, MemoryBackend, RecordBackend};
pub use error::StoreError;
pub use roster::EmployeeRoster;
pub use task_store::TaskStore;
