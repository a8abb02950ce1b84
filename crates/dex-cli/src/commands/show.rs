use anyhow::Context;
use dex_views::{DetailEntry, DetailView, Session, ViewSettings};

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::commands::shared::navigation::{NavigationResponse, surface_notices};
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `dex show`.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    show(&args.name, args.audit_limit, ctx, flags).await
}

/// Open the detail view of `name`, or report where the guard redirected.
pub async fn show(
    name: &str,
    audit_limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let settings = ViewSettings {
        audit_limit: audit_limit
            .filter(|limit| *limit > 0)
            .unwrap_or(ctx.session.settings.audit_limit),
        ..ctx.session.settings
    };
    let session = Session::with_settings(&ctx.session.gateway, &ctx.session.locks, settings);

    let opened = with_spinner(&format!("Loading {name}"), DetailView::open(&session, name))
        .await
        .with_context(|| format!("failed to load {name}"))?;

    match opened {
        DetailEntry::Loaded(view) => output(&view.snapshot(), flags.format),
        DetailEntry::Redirected(outcome) => {
            surface_notices(&outcome, flags);
            output(&NavigationResponse::from(outcome), flags.format)
        }
    }
}
