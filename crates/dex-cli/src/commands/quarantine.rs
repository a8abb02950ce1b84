use anyhow::Context;
use dex_views::{Confirmation, QuarantineScreen};

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuarantineCommands;
use crate::commands::shared::confirm::PromptConfirm;
use crate::commands::shared::navigation::NavigationResponse;
use crate::output::{notice, output};

/// Handle `dex quarantine`.
pub async fn handle(
    action: &QuarantineCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuarantineCommands::Status { pokemon } => status(pokemon.as_deref(), ctx, flags),
        QuarantineCommands::Purge { pokemon } => {
            let screen = QuarantineScreen::open(&ctx.session, pokemon.as_deref());
            let confirm = PromptConfirm::new(flags.yes);
            let result = screen
                .purge(&confirm)
                .await
                .context("failed to purge the catalog")?;
            match result {
                Confirmation::Declined => {
                    notice("Purge cancelled.", flags.quiet);
                    output(&screen.snapshot(), flags.format)
                }
                Confirmation::Completed(outcome) => {
                    output(&NavigationResponse::from(outcome), flags.format)
                }
            }
        }
        QuarantineCommands::Restore { pokemon } => {
            let screen = QuarantineScreen::open(&ctx.session, pokemon.as_deref());
            let outcome = screen
                .restore()
                .await
                .context("failed to restore integrity")?;
            output(&NavigationResponse::from(outcome), flags.format)
        }
        QuarantineCommands::Keep { pokemon } => {
            let screen = QuarantineScreen::open(&ctx.session, pokemon.as_deref());
            let outcome = screen.keep().await.context("failed to keep quarantine")?;
            output(&NavigationResponse::from(outcome), flags.format)
        }
    }
}

/// Show the integrity alert for `pokemon`, defaulting to the locked entry.
pub fn status(pokemon: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let screen = QuarantineScreen::open(&ctx.session, pokemon);
    output(&screen.snapshot(), flags.format)
}
