//! # dex-lock
//!
//! Persistence for the single integrity lock.
//!
//! The store holds at most one [`IntegrityLock`]. Writing replaces whatever
//! was there (last write wins, no history). Reading never fails: missing,
//! corrupt or malformed data reads as "no lock". There is no coordination
//! between processes sharing one store; concurrent writers race.

mod error;
mod file;
mod memory;

pub use dex_core::IntegrityLock;
pub use error::LockError;
pub use file::FileLockStore;
pub use memory::MemoryLockStore;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Durable slot holding at most one integrity lock.
pub trait LockStore {
    /// The persisted lock, or `None` when absent or unreadable.
    fn read(&self) -> Option<IntegrityLock>;

    /// Replace any existing lock with a fresh active lock for `pokemon_name`.
    ///
    /// # Errors
    ///
    /// Returns [`LockError::EmptyName`] for an empty name, or another
    /// [`LockError`] if the lock could not be persisted. The previous contents
    /// are left untouched in either case.
    fn write(&self, pokemon_name: &str) -> Result<IntegrityLock, LockError>;

    /// Remove the lock. Clearing an absent lock is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`LockError`] if an existing lock could not be removed.
    fn clear(&self) -> Result<(), LockError>;
}

impl<S: LockStore + ?Sized> LockStore for &S {
    fn read(&self) -> Option<IntegrityLock> {
        (**self).read()
    }

    fn write(&self, pokemon_name: &str) -> Result<IntegrityLock, LockError> {
        (**self).write(pokemon_name)
    }

    fn clear(&self) -> Result<(), LockError> {
        (**self).clear()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedLock {
    #[serde(default)]
    pokemon_name: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    active: Option<bool>,
}

/// Decode a persisted lock record.
///
/// Requires a JSON object with a non-empty `pokemonName`. The name is kept
/// as stored, surrounding whitespace included. An explicit
/// `"active": false` reads as no lock. A missing or unparseable `createdAt`
/// is tolerated and reported as the Unix epoch.
#[must_use]
pub fn parse_persisted(raw: &str) -> Option<IntegrityLock> {
    let persisted: PersistedLock = match serde_json::from_str(raw) {
        Ok(persisted) => persisted,
        Err(error) => {
            tracing::warn!(%error, "ignoring malformed integrity lock");
            return None;
        }
    };

    let name = persisted.pokemon_name.filter(|name| !name.is_empty())?;
    if persisted.active == Some(false) {
        return None;
    }

    let created_at = persisted
        .created_at
        .and_then(|at| DateTime::parse_from_rfc3339(&at).ok())
        .map_or(DateTime::<Utc>::UNIX_EPOCH, |at| at.with_timezone(&Utc));

    Some(IntegrityLock::new_at(name, created_at))
}

/// Build the record a store is about to persist.
fn fresh_lock(pokemon_name: &str) -> Result<IntegrityLock, LockError> {
    if pokemon_name.is_empty() {
        return Err(LockError::EmptyName);
    }
    Ok(IntegrityLock::new(pokemon_name))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn parses_well_formed_record() {
        let lock = parse_persisted(
            r#"{"pokemonName":"Pikachu","createdAt":"2026-03-01T10:00:00.000Z","active":true}"#,
        )
        .expect("lock should parse");
        assert_eq!(lock.pokemon_name, "Pikachu");
        assert_eq!(lock.created_at.to_rfc3339(), "2026-03-01T10:00:00+00:00");
        assert!(lock.active);
    }

    #[test]
    fn tolerates_missing_timestamp() {
        let lock = parse_persisted(r#"{"pokemonName":"Eevee"}"#).expect("lock should parse");
        assert_eq!(lock.pokemon_name, "Eevee");
        assert_eq!(lock.created_at, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn whitespace_name_is_kept_verbatim() {
        let lock = parse_persisted(r#"{"pokemonName":"   "}"#).expect("lock should parse");
        assert_eq!(lock.pokemon_name, "   ");
    }

    #[rstest]
    #[case("")]
    #[case("not json")]
    #[case("null")]
    #[case("[]")]
    #[case("42")]
    #[case("{}")]
    #[case(r#"{"pokemonName":""}"#)]
    #[case(r#"{"pokemonName":12}"#)]
    #[case(r#"{"pokemonName":"Pikachu","active":false}"#)]
    fn malformed_records_read_as_absent(#[case] raw: &str) {
        assert_eq!(parse_persisted(raw), None);
    }
}
