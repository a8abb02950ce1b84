use anyhow::Context;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::NameArgs;
use crate::commands::shared::navigation::{NavigationResponse, open_detail};
use crate::output::output;

/// Handle `dex toggle-corruption`.
pub async fn handle(args: &NameArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = open_detail(&ctx.session, &args.name, flags).await?;
    let outcome = view
        .toggle_simulated_corruption()
        .await
        .with_context(|| format!("failed to toggle simulated corruption on {}", args.name))?;
    output(&NavigationResponse::from(outcome), flags.format)
}
