use anyhow::Context;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::EditArgs;
use crate::commands::shared::navigation::open_detail;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `dex edit`: seed a draft from the stored stats, apply the
/// assignments, and send the full draft.
pub async fn handle(args: &EditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = open_detail(&ctx.session, &args.name, flags).await?;

    view.begin_edit();
    for (stat, value) in &args.stats {
        view.set_draft(*stat, *value)?;
    }

    with_spinner(&format!("Updating {}", args.name), view.submit_edit())
        .await
        .with_context(|| format!("failed to update stats of {}", args.name))?;
    output(&view.snapshot(), flags.format)
}
