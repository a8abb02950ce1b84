use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::{IntegrityLock, LockError, LockStore, fresh_lock, parse_persisted};

/// Lock store backed by a single JSON file.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a failed write leaves the previous lock in place.
#[derive(Debug, Clone)]
pub struct FileLockStore {
    path: PathBuf,
}

impl FileLockStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> LockError {
        LockError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl LockStore for FileLockStore {
    fn read(&self) -> Option<IntegrityLock> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => parse_persisted(&raw),
            Err(error) if error.kind() == ErrorKind::NotFound => None,
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "integrity lock unreadable");
                None
            }
        }
    }

    fn write(&self, pokemon_name: &str) -> Result<IntegrityLock, LockError> {
        let lock = fresh_lock(pokemon_name)?;
        let raw = serde_json::to_vec(&lock)?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| self.io_error(e))?;

        let mut staged = tempfile::NamedTempFile::new_in(&parent).map_err(|e| self.io_error(e))?;
        staged.write_all(&raw).map_err(|e| self.io_error(e))?;
        staged.flush().map_err(|e| self.io_error(e))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        tracing::info!(pokemon = pokemon_name, path = %self.path.display(), "integrity lock written");
        Ok(lock)
    }

    fn clear(&self) -> Result<(), LockError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "integrity lock cleared");
                Ok(())
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(self.io_error(error)),
        }
    }
}
