use dex_lock::LockStore;
use dex_views::{CatalogGateway, DetailEntry, DetailView, GuardState, Outcome, Session};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::notice;

/// Where a guarded action leaves the user.
#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    #[serde(flatten)]
    pub guard: GuardState,
    pub route: Option<String>,
    pub notices: Vec<String>,
}

impl From<Outcome> for NavigationResponse {
    fn from(outcome: Outcome) -> Self {
        Self {
            guard: outcome.state,
            route: outcome.route.map(|route| route.to_string()),
            notices: outcome.notices,
        }
    }
}

/// Print an outcome's blocking notices on stderr.
pub fn surface_notices(outcome: &Outcome, flags: &GlobalFlags) {
    for message in &outcome.notices {
        notice(message, flags.quiet);
    }
}

/// Open `name` for an action that requires its detail view.
///
/// A guard redirect becomes an error naming the quarantine route.
pub async fn open_detail<'s, G, S>(
    session: &'s Session<G, S>,
    name: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<DetailView<'s, G, S>>
where
    G: CatalogGateway,
    S: LockStore,
{
    match DetailView::open(session, name).await? {
        DetailEntry::Loaded(view) => Ok(view),
        DetailEntry::Redirected(outcome) => {
            surface_notices(&outcome, flags);
            let route = outcome
                .route
                .map_or_else(String::new, |route| route.to_string());
            anyhow::bail!(
                "{name} cannot be opened while the integrity lock is active (redirected to {route})"
            )
        }
    }
}
