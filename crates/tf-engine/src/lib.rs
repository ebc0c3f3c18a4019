//! # tf-engine
//!
//! The task lifecycle controller and timer accounting engine.
//!
//! [`TaskService`] serializes every mutation of the task store and the
//! running timers behind one async mutex. A running timer has a background
//! ticker that periodically credits elapsed whole seconds to the task; stop,
//! complete, delete, and shutdown cancel it and credit the remainder, so a
//! run is never counted twice.
//!
//! [`stats`] and [`filter`] hold the pure projections used by dashboards and
//! admin views.

pub mod filter;
pub mod service;
pub mod stats;
pub mod timer;

pub use filter::TaskFilter;
pub use service::TaskService;
pub use timer::{TimerEngine, TimerHandle, TimerStart};
