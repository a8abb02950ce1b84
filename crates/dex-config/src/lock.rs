//! Integrity lock persistence settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const LOCK_FILE_NAME: &str = "integrity_lock.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LockConfig {
    /// Where the lock record is persisted. Empty means the per-user data dir.
    #[serde(default)]
    pub path: String,
}

impl LockConfig {
    /// Resolved lock file path.
    ///
    /// Falls back to `./.pokedex/integrity_lock.json` when the platform has
    /// no data directory.
    #[must_use]
    pub fn resolved_path(&self) -> PathBuf {
        if !self.path.trim().is_empty() {
            return PathBuf::from(&self.path);
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".pokedex").join(LOCK_FILE_NAME),
            |dir| dir.join("pokedex").join(LOCK_FILE_NAME),
        )
    }
}
