use anyhow::Context;
use dex_core::Entry;
use dex_views::CatalogView;
use serde::Serialize;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateArgs;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Debug, Serialize)]
struct CreateResponse {
    entry: Option<Entry>,
    route: String,
}

/// Handle `dex create`.
pub async fn handle(
    args: &CreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let view = CatalogView::new(&ctx.session);
    let created = with_spinner(
        &format!("Creating {}", args.english),
        view.create(args.to_new_entry()),
    )
    .await
    .with_context(|| format!("failed to create {}", args.english))?;

    output(
        &CreateResponse {
            entry: created.entry,
            route: created.route.to_string(),
        },
        flags.format,
    )
}
