//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are merged into the stored entity; everything else keeps its prior
//! value. The update serializes to its changed fields only, for log detail.

pub mod task;
