use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(&args, ctx, flags).await,
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::Show(args) => commands::show::handle(&args, ctx, flags).await,
        Commands::Edit(args) => commands::edit::handle(&args, ctx, flags).await,
        Commands::Create(args) => commands::create::handle(&args, ctx, flags).await,
        Commands::Delete(args) => commands::delete::handle(&args, ctx, flags).await,
        Commands::ToggleCorruption(args) => {
            commands::toggle_corruption::handle(&args, ctx, flags).await
        }
        Commands::Quarantine { action } => commands::quarantine::handle(&action, ctx, flags).await,
        Commands::Lock { action } => commands::lock::handle(&action, ctx, flags),
        Commands::Open(args) => commands::open::handle(&args, ctx, flags).await,
    }
}
