use anyhow::Context;
use dex_views::Route;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::OpenArgs;
use crate::commands::{list, quarantine, show};

/// Handle `dex open`: render whichever screen a route path names.
pub async fn handle(args: &OpenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route: Route = args
        .route
        .parse()
        .with_context(|| format!("cannot open '{}'", args.route))?;
    tracing::debug!(%route, "opening route");

    match route {
        Route::Catalog => list::show_page(0, ctx, flags).await,
        Route::Detail { name } => show::show(&name, None, ctx, flags).await,
        Route::Quarantine { pokemon } => quarantine::status(Some(&pokemon), ctx, flags),
    }
}
