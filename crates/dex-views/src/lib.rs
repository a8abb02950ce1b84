//! # dex-views
//!
//! Screen-level behavior of the Pokédex client, independent of rendering.
//!
//! - [`guard`]: the integrity-lock quarantine state machine, as a pure
//!   transition function plus an executor that applies its effects
//! - [`catalog`]: paginated listing and client-side search
//! - [`detail`]: single-entry viewer/editor
//! - [`quarantine`]: the integrity alert screen (purge, restore, keep)
//! - [`route`]: navigable screens
//! - [`search`], [`debounce`], [`staleness`]: search normalization, input
//!   debouncing and superseded-response discard
//!
//! Views borrow a [`Session`] holding the data gateway and lock store, so
//! tests can substitute fakes for both.

pub mod catalog;
pub mod confirm;
pub mod debounce;
pub mod detail;
pub mod gateway;
pub mod guard;
pub mod quarantine;
pub mod route;
pub mod search;
pub mod staleness;

mod error;
mod session;

pub use catalog::CatalogView;
pub use confirm::{Confirm, Confirmation};
pub use detail::{DetailEntry, DetailView};
pub use error::ViewError;
pub use gateway::CatalogGateway;
pub use guard::{GuardEvent, GuardState, Outcome, QuarantineGuard};
pub use quarantine::QuarantineScreen;
pub use route::Route;
pub use session::{Session, ViewSettings};
