//! Entity structs for TaskFlow domain objects.
//!
//! Each entity is persisted as one JSON record per line by `tf-store`.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod task;
mod user;

pub use task::{NewTask, Task};
pub use user::{NewEmployee, User, UserProfile};
