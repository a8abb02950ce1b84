use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client-persisted record naming the one quarantined entry.
///
/// At most one lock exists at a time. Its presence means the catalog is
/// quarantined; its absence means the catalog is clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityLock {
    pub pokemon_name: String,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

impl IntegrityLock {
    /// Fresh active lock stamped with the current time.
    #[must_use]
    pub fn new(pokemon_name: impl Into<String>) -> Self {
        Self::new_at(pokemon_name, Utc::now())
    }

    #[must_use]
    pub fn new_at(pokemon_name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            pokemon_name: pokemon_name.into(),
            created_at,
            active: true,
        }
    }

    /// Whether this lock names `entity_name`.
    ///
    /// Case-insensitive only: whitespace and diacritics are compared as-is,
    /// unlike catalog search normalization.
    #[must_use]
    pub fn names(&self, entity_name: &str) -> bool {
        Self::same_name(&self.pokemon_name, entity_name)
    }

    /// Name comparison used for lock matching, for callers holding only the
    /// locked name.
    #[must_use]
    pub fn same_name(locked: &str, entity_name: &str) -> bool {
        locked.to_lowercase() == entity_name.to_lowercase()
    }
}
