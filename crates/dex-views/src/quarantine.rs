//! The integrity alert screen.
//!
//! Reached when a lock is active: right after simulating corruption, or when
//! navigation to another entity was blocked. Offers purge, restore or keep.

use dex_core::IntegrityLock;
use dex_lock::LockStore;
use serde::Serialize;

use crate::confirm::{Confirm, Confirmation};
use crate::error::ViewError;
use crate::gateway::CatalogGateway;
use crate::guard::{GuardEvent, GuardState, Outcome, QuarantineGuard};
use crate::session::Session;

const UNKNOWN_SUBJECT: &str = "Unknown";

/// Serializable view of the quarantine screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarantineSnapshot {
    pub subject: String,
    pub state: GuardState,
    pub lock: Option<IntegrityLock>,
}

pub struct QuarantineScreen<'s, G, S> {
    session: &'s Session<G, S>,
    subject: String,
}

impl<'s, G, S> QuarantineScreen<'s, G, S>
where
    G: CatalogGateway,
    S: LockStore,
{
    /// Open the screen for `requested`, falling back to the locked entity and
    /// then to `"Unknown"`.
    #[must_use]
    pub fn open(session: &'s Session<G, S>, requested: Option<&str>) -> Self {
        let subject = requested
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .or_else(|| session.locks.read().map(|lock| lock.pokemon_name))
            .unwrap_or_else(|| UNKNOWN_SUBJECT.to_string());
        Self { session, subject }
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn lock(&self) -> Option<IntegrityLock> {
        self.session.locks.read()
    }

    /// Guard state of the subject, read fresh from the lock store.
    #[must_use]
    pub fn state(&self) -> GuardState {
        QuarantineGuard::new(self.session).current(&self.subject)
    }

    #[must_use]
    pub fn snapshot(&self) -> QuarantineSnapshot {
        QuarantineSnapshot {
            subject: self.subject.clone(),
            state: self.state(),
            lock: self.lock(),
        }
    }

    /// Purge the whole catalog after confirmation, clear the lock and land on
    /// the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Gateway`] if the purge request fails; the lock is
    /// left in place.
    pub async fn purge(
        &self,
        confirm: &impl Confirm,
    ) -> Result<Confirmation<Outcome>, ViewError> {
        if !confirm.confirm("Purge the entire Pokédex?") {
            return Ok(Confirmation::Declined);
        }
        let outcome = self.run(GuardEvent::Purge).await?;
        tracing::info!("catalog purged and integrity lock cleared");
        Ok(Confirmation::Completed(outcome))
    }

    /// Clear the lock and land on the locked entity's detail view.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Core`] when no lock is active, or a lock store
    /// failure.
    pub async fn restore(&self) -> Result<Outcome, ViewError> {
        self.run(GuardEvent::RestoreIntegrity).await
    }

    /// Keep the lock and return to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Core`] when no lock is active.
    pub async fn keep(&self) -> Result<Outcome, ViewError> {
        self.run(GuardEvent::KeepQuarantine).await
    }

    async fn run(&self, event: GuardEvent) -> Result<Outcome, ViewError> {
        let guard = QuarantineGuard::new(self.session);
        guard.apply(&self.state(), event).await
    }
}
