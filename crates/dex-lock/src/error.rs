use thiserror::Error;

/// Failures persisting or removing the lock. Reads never fail.
#[derive(Debug, Error)]
pub enum LockError {
    #[error("lock store I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("a lock must name an entry")]
    EmptyName,

    #[error("lock serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
