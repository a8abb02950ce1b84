//! Integrity-lock quarantine state machine.
//!
//! The state is never stored. It is computed on entry to any entity-scoped
//! screen from the persisted lock and the entity being viewed:
//!
//! ```text
//! no lock                          → clear
//! lock names the viewed entity     → locked_matching
//! lock names another entity        → locked_blocked
//! ```
//!
//! [`transition`] is pure: it maps a state and an event to the next state and
//! a list of [`Effect`]s. [`QuarantineGuard`] applies those effects against a
//! [`Session`], in order, stopping at the first failure.
//!
//! Enforcement happens only where a detail screen is entered. There is no
//! background watcher and no server-side check; the lock is a client UX gate.

use std::fmt;

use dex_core::{CoreError, IntegrityLock};
use dex_lock::LockStore;
use serde::Serialize;

use crate::error::ViewError;
use crate::gateway::CatalogGateway;
use crate::route::Route;
use crate::session::Session;

// ---------------------------------------------------------------------------
// GuardState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GuardState {
    Clear,
    /// The lock names the entity being viewed.
    LockedMatching { locked: String },
    /// The lock names a different entity.
    LockedBlocked { locked: String },
}

impl GuardState {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::LockedMatching { .. } => "locked_matching",
            Self::LockedBlocked { .. } => "locked_blocked",
        }
    }

    /// Name of the locked entity, if any.
    #[must_use]
    pub fn locked_name(&self) -> Option<&str> {
        match self {
            Self::Clear => None,
            Self::LockedMatching { locked } | Self::LockedBlocked { locked } => Some(locked),
        }
    }

    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        matches!(self, Self::LockedBlocked { .. })
    }
}

impl fmt::Display for GuardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the guard state for viewing `viewing` under `lock`.
#[must_use]
pub fn evaluate(lock: Option<&IntegrityLock>, viewing: &str) -> GuardState {
    match lock {
        None => GuardState::Clear,
        Some(lock) if lock.names(viewing) => GuardState::LockedMatching {
            locked: lock.pokemon_name.clone(),
        },
        Some(lock) => GuardState::LockedBlocked {
            locked: lock.pokemon_name.clone(),
        },
    }
}

// ---------------------------------------------------------------------------
// Events and effects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardEvent {
    /// User flags `entity` as corrupted.
    SimulateCorruption { entity: String },
    /// User removes the simulated corruption on the locked entity.
    RemoveCorruption,
    /// Screen mount or navigation to `entity`'s detail view.
    Navigate { entity: String },
    /// User purges the whole catalog.
    Purge,
    /// User restores integrity from the quarantine screen.
    RestoreIntegrity,
    /// User dismisses the quarantine screen, keeping the lock.
    KeepQuarantine,
}

impl GuardEvent {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SimulateCorruption { .. } => "simulate_corruption",
            Self::RemoveCorruption => "remove_corruption",
            Self::Navigate { .. } => "navigate",
            Self::Purge => "purge",
            Self::RestoreIntegrity => "restore_integrity",
            Self::KeepQuarantine => "keep_quarantine",
        }
    }
}

impl fmt::Display for GuardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    WriteLock(String),
    ClearLock,
    PurgeCatalog,
    Navigate(Route),
    Notice(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: GuardState,
    pub effects: Vec<Effect>,
}

/// Pure transition function of the quarantine state machine.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTransition`] when `event` is not accepted in
/// `state`.
pub fn transition(state: &GuardState, event: GuardEvent) -> Result<Transition, CoreError> {
    use GuardState::{Clear, LockedBlocked, LockedMatching};

    let transition = match (state, event) {
        (Clear, GuardEvent::SimulateCorruption { entity }) => Transition {
            next: LockedMatching {
                locked: entity.clone(),
            },
            effects: vec![
                Effect::WriteLock(entity.clone()),
                Effect::Navigate(Route::quarantine(entity)),
            ],
        },
        (LockedMatching { .. }, GuardEvent::RemoveCorruption) => Transition {
            next: Clear,
            effects: vec![Effect::ClearLock],
        },
        (Clear, GuardEvent::Navigate { entity }) => Transition {
            next: Clear,
            effects: vec![Effect::Navigate(Route::detail(entity))],
        },
        (
            LockedMatching { locked } | LockedBlocked { locked },
            GuardEvent::Navigate { entity },
        ) => {
            if IntegrityLock::same_name(locked, &entity) {
                Transition {
                    next: LockedMatching {
                        locked: locked.clone(),
                    },
                    effects: vec![Effect::Navigate(Route::detail(entity))],
                }
            } else {
                Transition {
                    next: LockedBlocked {
                        locked: locked.clone(),
                    },
                    effects: vec![
                        Effect::Notice(format!(
                            "{locked} is quarantined; {entity} cannot be opened until integrity is restored"
                        )),
                        Effect::Navigate(Route::quarantine(locked.clone())),
                    ],
                }
            }
        }
        (_, GuardEvent::Purge) => Transition {
            next: Clear,
            effects: vec![
                Effect::PurgeCatalog,
                Effect::ClearLock,
                Effect::Navigate(Route::Catalog),
            ],
        },
        (
            LockedMatching { locked } | LockedBlocked { locked },
            GuardEvent::RestoreIntegrity,
        ) => Transition {
            next: Clear,
            effects: vec![
                Effect::ClearLock,
                Effect::Navigate(Route::detail(locked.clone())),
            ],
        },
        (LockedMatching { .. } | LockedBlocked { .. }, GuardEvent::KeepQuarantine) => Transition {
            next: state.clone(),
            effects: vec![Effect::Navigate(Route::Catalog)],
        },
        (state, event) => {
            return Err(CoreError::InvalidTransition {
                from: state.to_string(),
                event: event.to_string(),
            });
        }
    };

    Ok(transition)
}

// ---------------------------------------------------------------------------
// Executor
// ---------------------------------------------------------------------------

/// Result of applying a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub state: GuardState,
    /// Where the user lands, if the transition navigates.
    pub route: Option<Route>,
    /// Blocking notices to surface before navigating.
    pub notices: Vec<String>,
}

/// Applies quarantine transitions against a session's lock store and gateway.
pub struct QuarantineGuard<'s, G, S> {
    session: &'s Session<G, S>,
}

impl<'s, G, S> QuarantineGuard<'s, G, S>
where
    G: CatalogGateway,
    S: LockStore,
{
    #[must_use]
    pub const fn new(session: &'s Session<G, S>) -> Self {
        Self { session }
    }

    /// Guard state for viewing `entity`, from the persisted lock.
    #[must_use]
    pub fn current(&self, entity: &str) -> GuardState {
        evaluate(self.session.locks.read().as_ref(), entity)
    }

    /// Evaluate navigation to `entity`'s detail view.
    ///
    /// # Errors
    ///
    /// Propagates effect failures from [`apply`](Self::apply).
    pub async fn navigate(&self, entity: &str) -> Result<Outcome, ViewError> {
        let state = self.current(entity);
        let outcome = self
            .apply(
                &state,
                GuardEvent::Navigate {
                    entity: entity.to_string(),
                },
            )
            .await?;
        if outcome.state.is_blocked() {
            tracing::info!(
                entity,
                locked = outcome.state.locked_name(),
                "navigation blocked by integrity lock"
            );
        }
        Ok(outcome)
    }

    /// Run `event` from `state` and apply its effects in order.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Core`] for an invalid transition, or the first
    /// lock-store or gateway failure. Effects after a failure are not applied.
    pub async fn apply(&self, state: &GuardState, event: GuardEvent) -> Result<Outcome, ViewError> {
        tracing::debug!(from = %state, %event, "quarantine transition");
        let Transition { next, effects } = transition(state, event)?;

        let mut route = None;
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::WriteLock(name) => {
                    self.session.locks.write(&name)?;
                }
                Effect::ClearLock => self.session.locks.clear()?,
                Effect::PurgeCatalog => self.session.gateway.purge().await?,
                Effect::Navigate(target) => route = Some(target),
                Effect::Notice(message) => notices.push(message),
            }
        }

        Ok(Outcome {
            state: next,
            route,
            notices,
        })
    }
}
