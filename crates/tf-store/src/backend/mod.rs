//! Load/save contract between the in-memory collections and whatever store
//! holds them.
//!
//! A backend always moves the full collection: `save` replaces everything
//! previously stored (last write wins).

mod jsonl;
mod memory;

pub use jsonl::JsonlFile;
pub use memory::MemoryBackend;

use crate::error::StoreError;

/// Persists a flat collection of records.
pub trait RecordBackend<T>: Send + Sync {
    /// Read every stored record. An empty or absent store yields an empty vec.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store exists but cannot be read or decoded.
    fn load(&self) -> Result<Vec<T>, StoreError>;

    /// Replace the stored collection with `records`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    fn save(&self, records: &[T]) -> Result<(), StoreError>;

    /// Short human-readable location for log lines.
    fn describe(&self) -> String;
}
