//! In-process backend holding the serialized collection as a single JSON
//! string, the way a browser key-value slot would.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::RecordBackend;
use crate::error::StoreError;

/// Shared in-memory slot. Clones observe the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `raw` already in the slot, valid or not.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw.into());
        backend
    }

    /// Current slot contents.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Make subsequent saves fail with `StoreError::WriteRejected`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl<T> RecordBackend<T> for MemoryBackend
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>, StoreError> {
        match self.raw() {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, records: &[T]) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteRejected {
                backend: <Self as RecordBackend<T>>::describe(self),
            });
        }
        let raw = serde_json::to_string(records)?;
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_loads_empty() {
        let backend = MemoryBackend::new();
        let loaded: Vec<u32> = backend.load().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn clones_share_the_slot() {
        let backend = MemoryBackend::new();
        let other = backend.clone();
        RecordBackend::<u32>::save(&backend, &[1, 2, 3]).unwrap();
        assert_eq!(other.raw().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn garbage_slot_is_an_error() {
        let backend = MemoryBackend::with_raw("{not valid");
        let result: Result<Vec<u32>, _> = backend.load();
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[test]
    fn rejected_write_leaves_slot_untouched() {
        let backend = MemoryBackend::with_raw("[7]");
        backend.set_fail_writes(true);
        let result = RecordBackend::<u32>::save(&backend, &[1]);
        assert!(matches!(result, Err(StoreError::WriteRejected { .. })));
        assert_eq!(backend.raw().as_deref(), Some("[7]"));
    }
}
