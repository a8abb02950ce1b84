use std::sync::{Mutex, PoisonError};

use crate::{IntegrityLock, LockError, LockStore, fresh_lock, parse_persisted};

/// In-process lock store for tests and ephemeral sessions.
///
/// Keeps the serialized record, so reads go through the same decoding as the
/// file store.
#[derive(Debug, Default)]
pub struct MemoryLockStore {
    slot: Mutex<Option<String>>,
}

impl MemoryLockStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a raw persisted value, well-formed or not.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    /// Raw persisted value, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LockStore for MemoryLockStore {
    fn read(&self) -> Option<IntegrityLock> {
        self.raw().as_deref().and_then(parse_persisted)
    }

    fn write(&self, pokemon_name: &str) -> Result<IntegrityLock, LockError> {
        let lock = fresh_lock(pokemon_name)?;
        let raw = serde_json::to_string(&lock)?;
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        Ok(lock)
    }

    fn clear(&self) -> Result<(), LockError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
