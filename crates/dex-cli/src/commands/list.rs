use anyhow::Context;
use dex_views::CatalogView;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `dex list`.
pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    show_page(args.page, ctx, flags).await
}

pub async fn show_page(page: u32, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = CatalogView::new(&ctx.session);
    with_spinner("Loading catalog", view.show_page(page))
        .await
        .with_context(|| format!("failed to load catalog page {page}"))?;
    output(&view.snapshot(), flags.format)
}
