//! Paginated listing and client-side search.
//!
//! Search fetches the whole collection and filters it locally with
//! [`search::filter_entries`]. Every display refresh takes a ticket from a
//! [`LatestTracker`]; a response arriving after a newer refresh was issued is
//! discarded instead of overwriting the newer display.

use std::sync::{Mutex, MutexGuard, PoisonError};

use dex_core::{Entry, NewEntry};
use serde::Serialize;

use crate::error::ViewError;
use crate::gateway::CatalogGateway;
use crate::route::Route;
use crate::search;
use crate::session::Session;
use crate::staleness::LatestTracker;

/// What the catalog is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CatalogMode {
    Page,
    Search { query: String },
}

/// Serializable view of the catalog display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSnapshot {
    #[serde(flatten)]
    pub mode: CatalogMode,
    pub page: u32,
    pub has_previous: bool,
    /// The store signals no last page, so this is always true.
    pub has_next: bool,
    pub loading: bool,
    pub notice: Option<String>,
    pub entries: Vec<EntryRow>,
}

/// A listed entry together with the name shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRow {
    pub display_name: String,
    #[serde(flatten)]
    pub entry: Entry,
}

impl From<Entry> for EntryRow {
    fn from(entry: Entry) -> Self {
        Self {
            display_name: entry.name.display().to_string(),
            entry,
        }
    }
}

/// Whether a refresh was applied to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Applied,
    /// A newer refresh was issued while this one was in flight.
    Stale,
}

/// A successfully created entry and where to go next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Created {
    pub entry: Option<Entry>,
    pub route: Route,
}

#[derive(Debug, Default)]
struct CatalogState {
    page: u32,
    query: Option<String>,
    entries: Vec<Entry>,
    loading: bool,
    notice: Option<String>,
}

pub struct CatalogView<'s, G, S> {
    session: &'s Session<G, S>,
    latest: LatestTracker,
    state: Mutex<CatalogState>,
}

impl<'s, G, S> CatalogView<'s, G, S>
where
    G: CatalogGateway,
{
    #[must_use]
    pub fn new(session: &'s Session<G, S>) -> Self {
        Self {
            session,
            latest: LatestTracker::new(),
            state: Mutex::new(CatalogState::default()),
        }
    }

    /// One page of entries, without touching the display.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Gateway`] if the request fails.
    pub async fn list_page(&self, page: u32) -> Result<Vec<Entry>, ViewError> {
        Ok(self.session.gateway.list_page(page).await?)
    }

    /// Entries whose normalized english or french name contains the
    /// normalized query. A blank query falls back to page 0.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Gateway`] if the request fails.
    pub async fn search_all(&self, query: &str) -> Result<Vec<Entry>, ViewError> {
        if search::search_query(query).is_none() {
            return self.list_page(0).await;
        }
        let entries = self.session.gateway.list_all().await?;
        Ok(search::filter_entries(entries, query))
    }

    /// Show `page` of the paginated listing.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Gateway`] if the request fails and is still
    /// current; the notice is recorded and prior entries are kept.
    pub async fn show_page(&self, page: u32) -> Result<Refresh, ViewError> {
        let ticket = self.latest.issue();
        self.lock_state().loading = true;

        let result = self.list_page(page).await;
        if !self.latest.is_current(ticket) {
            tracing::debug!(page, "discarding superseded page result");
            return Ok(Refresh::Stale);
        }

        let mut state = self.lock_state();
        state.loading = false;
        match result {
            Ok(entries) => {
                state.page = page;
                state.query = None;
                state.entries = entries;
                state.notice = None;
                Ok(Refresh::Applied)
            }
            Err(error) => {
                state.notice = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Show search results for `query`, or page 0 when the query is blank.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Gateway`] if the request fails and is still
    /// current; the notice is recorded and prior entries are kept.
    pub async fn show_search(&self, query: &str) -> Result<Refresh, ViewError> {
        if search::search_query(query).is_none() {
            return self.show_page(0).await;
        }

        let ticket = self.latest.issue();
        self.lock_state().loading = true;

        let result = self.search_all(query).await;
        if !self.latest.is_current(ticket) {
            tracing::debug!(query, "discarding superseded search result");
            return Ok(Refresh::Stale);
        }

        let mut state = self.lock_state();
        state.loading = false;
        match result {
            Ok(entries) => {
                state.query = Some(query.trim().to_string());
                state.entries = entries;
                state.notice = None;
                Ok(Refresh::Applied)
            }
            Err(error) => {
                state.notice = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// # Errors
    ///
    /// See [`show_page`](Self::show_page).
    pub async fn next_page(&self) -> Result<Refresh, ViewError> {
        let page = self.lock_state().page.saturating_add(1);
        self.show_page(page).await
    }

    /// Go back one page. At page 0 this does nothing.
    ///
    /// # Errors
    ///
    /// See [`show_page`](Self::show_page).
    pub async fn previous_page(&self) -> Result<Refresh, ViewError> {
        let page = self.lock_state().page;
        if page == 0 {
            return Ok(Refresh::Applied);
        }
        self.show_page(page - 1).await
    }

    /// Drop the current notice.
    pub fn dismiss_notice(&self) {
        self.lock_state().notice = None;
    }

    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        let state = self.lock_state();
        CatalogSnapshot {
            mode: state
                .query
                .clone()
                .map_or(CatalogMode::Page, |query| CatalogMode::Search { query }),
            page: state.page,
            has_previous: state.page > 0,
            has_next: true,
            loading: state.loading,
            notice: state.notice.clone(),
            entries: state.entries.iter().cloned().map(EntryRow::from).collect(),
        }
    }

    /// Validate and create an entry, landing on its detail view.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Core`] when validation fails (no request is
    /// issued), or [`ViewError::Gateway`] if the request fails.
    pub async fn create(&self, entry: NewEntry) -> Result<Created, ViewError> {
        entry.validate()?;
        let created = self.session.gateway.create(&entry).await?;
        tracing::info!(name = %entry.name.english, "entry created");
        Ok(Created {
            entry: created,
            route: Route::detail(entry.name.english),
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
