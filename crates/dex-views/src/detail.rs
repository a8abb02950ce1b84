//! Single-entry viewer and editor.
//!
//! Opening a detail view first runs the quarantine guard; a blocked entity
//! never loads and the caller receives the redirect instead. The entry and its
//! audit trail load concurrently, and either failing fails the whole load.

use dex_core::{AuditLogEntry, BaseStats, CoreError, Entry, Stat};
use dex_lock::LockStore;
use serde::Serialize;

use crate::confirm::{Confirm, Confirmation};
use crate::error::ViewError;
use crate::gateway::CatalogGateway;
use crate::guard::{GuardEvent, GuardState, Outcome, QuarantineGuard};
use crate::route::Route;
use crate::session::Session;

/// Result of opening a detail view.
pub enum DetailEntry<'s, G, S> {
    Loaded(DetailView<'s, G, S>),
    /// The guard redirected away from the requested entity.
    Redirected(Outcome),
}

/// Serializable view of a loaded detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSnapshot {
    pub name: String,
    /// French name when the entry has one.
    pub display_name: String,
    pub guard: GuardState,
    pub entry: Entry,
    pub audit: Vec<AuditLogEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<BaseStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

pub struct DetailView<'s, G, S> {
    session: &'s Session<G, S>,
    name: String,
    entry: Entry,
    audit: Vec<AuditLogEntry>,
    draft: Option<BaseStats>,
    notice: Option<String>,
}

impl<'s, G, S> DetailView<'s, G, S>
where
    G: CatalogGateway,
    S: LockStore,
{
    /// Guard, then load `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when the store has no such entry, or the
    /// first gateway failure of the concurrent load.
    pub async fn open(
        session: &'s Session<G, S>,
        name: &str,
    ) -> Result<DetailEntry<'s, G, S>, ViewError> {
        let outcome = QuarantineGuard::new(session).navigate(name).await?;
        if outcome.state.is_blocked() {
            return Ok(DetailEntry::Redirected(outcome));
        }

        let (entry, audit) = load(session, name).await?;
        Ok(DetailEntry::Loaded(Self {
            session,
            name: name.to_string(),
            entry,
            audit,
            draft: None,
            notice: None,
        }))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn entry(&self) -> &Entry {
        &self.entry
    }

    #[must_use]
    pub fn audit(&self) -> &[AuditLogEntry] {
        &self.audit
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Guard state of this entity, read fresh from the lock store.
    #[must_use]
    pub fn guard_state(&self) -> GuardState {
        QuarantineGuard::new(self.session).current(&self.name)
    }

    #[must_use]
    pub fn snapshot(&self) -> DetailSnapshot {
        DetailSnapshot {
            name: self.name.clone(),
            display_name: self.entry.name.display().to_string(),
            guard: self.guard_state(),
            entry: self.entry.clone(),
            audit: self.audit.clone(),
            draft: self.draft,
            notice: self.notice.clone(),
        }
    }

    /// Replace the whole stats mapping, then refresh the audit trail.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Core`] for out-of-range stats (no request is
    /// issued), or the first gateway failure.
    pub async fn update_stats(&mut self, stats: BaseStats) -> Result<&Entry, ViewError> {
        stats.validate()?;
        match self.push_stats(&stats).await {
            Ok(()) => {
                self.notice = None;
                Ok(&self.entry)
            }
            Err(error) => Err(self.record(error)),
        }
    }

    /// Enter edit mode with a draft seeded from the loaded stats.
    pub fn begin_edit(&mut self) -> &BaseStats {
        self.draft.get_or_insert(self.entry.base)
    }

    #[must_use]
    pub const fn draft(&self) -> Option<&BaseStats> {
        self.draft.as_ref()
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// # Errors
    ///
    /// Returns [`ViewError::EditNotActive`] outside edit mode.
    pub fn set_draft(&mut self, stat: Stat, value: u16) -> Result<(), ViewError> {
        let draft = self.draft.as_mut().ok_or(ViewError::EditNotActive)?;
        draft.set(stat, value);
        Ok(())
    }

    /// Leave edit mode, discarding the draft. No request is issued.
    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Send the full draft. Edit mode ends on success and the draft is kept
    /// on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::EditNotActive`] outside edit mode, otherwise see
    /// [`update_stats`](Self::update_stats).
    pub async fn submit_edit(&mut self) -> Result<&Entry, ViewError> {
        let draft = self.draft.ok_or(ViewError::EditNotActive)?;
        self.update_stats(draft).await?;
        self.draft = None;
        Ok(&self.entry)
    }

    /// Delete this entry after confirmation, landing on the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Gateway`] if the request fails.
    pub async fn delete(
        &mut self,
        confirm: &impl Confirm,
    ) -> Result<Confirmation<Route>, ViewError> {
        if !confirm.confirm(&format!("Delete {}?", self.name)) {
            return Ok(Confirmation::Declined);
        }
        match self.session.gateway.delete(&self.name).await {
            Ok(()) => {
                tracing::info!(name = %self.name, "entry deleted");
                Ok(Confirmation::Completed(Route::Catalog))
            }
            Err(error) => Err(self.record(error.into())),
        }
    }

    /// Flip simulated corruption on this entity.
    ///
    /// Clear locks this entity and lands on the quarantine screen; locked on
    /// this entity clears the lock.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Core`] when another entity holds the lock, or a
    /// lock store failure.
    pub async fn toggle_simulated_corruption(&mut self) -> Result<Outcome, ViewError> {
        let guard = QuarantineGuard::new(self.session);
        let state = guard.current(&self.name);
        let event = match state {
            GuardState::LockedMatching { .. } => GuardEvent::RemoveCorruption,
            GuardState::Clear | GuardState::LockedBlocked { .. } => {
                GuardEvent::SimulateCorruption {
                    entity: self.entry.canonical_name().to_string(),
                }
            }
        };
        let outcome = guard.apply(&state, event).await?;
        tracing::info!(name = %self.name, state = %outcome.state, "simulated corruption toggled");
        Ok(outcome)
    }

    async fn push_stats(&mut self, stats: &BaseStats) -> Result<(), ViewError> {
        let session = self.session;
        let updated = match session.gateway.update_stats(&self.name, stats).await? {
            Some(entry) => entry,
            None => fetch_entry(session, &self.name).await?,
        };
        self.entry = updated;
        self.audit = fetch_audit(session, &self.name).await?;
        Ok(())
    }

    fn record(&mut self, error: ViewError) -> ViewError {
        tracing::warn!(name = %self.name, %error, "detail request failed");
        self.notice = Some(error.to_string());
        error
    }
}

async fn load<G: CatalogGateway, S>(
    session: &Session<G, S>,
    name: &str,
) -> Result<(Entry, Vec<AuditLogEntry>), ViewError> {
    tokio::try_join!(fetch_entry(session, name), fetch_audit(session, name))
}

/// Audit records in retrieval order, capped at the configured limit even when
/// the store returns more.
async fn fetch_audit<G: CatalogGateway, S>(
    session: &Session<G, S>,
    name: &str,
) -> Result<Vec<AuditLogEntry>, ViewError> {
    let limit = session.settings.audit_limit;
    let mut audit = session.gateway.audit_logs(name, limit).await?;
    audit.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    Ok(audit)
}

async fn fetch_entry<G: CatalogGateway, S>(
    session: &Session<G, S>,
    name: &str,
) -> Result<Entry, ViewError> {
    session.gateway.get_by_name(name).await?.ok_or_else(|| {
        CoreError::NotFound {
            entity_type: "pokemon".into(),
            id: name.to_string(),
        }
        .into()
    })
}
