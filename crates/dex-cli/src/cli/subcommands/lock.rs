use clap::Subcommand;

/// Persisted integrity lock commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LockCommands {
    /// Show the lock, if any.
    Status,
    /// Remove the lock without touching the catalog.
    Clear,
}
