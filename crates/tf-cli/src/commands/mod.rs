pub mod board;
pub mod dashboard;
pub mod dispatch;
pub mod employee;
pub mod remaining;
pub mod shared;
pub mod stats;
pub mod task;
