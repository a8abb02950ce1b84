use clap::Subcommand;

/// Integrity alert actions. `--pokemon` defaults to the locked entry.
#[derive(Clone, Debug, Subcommand)]
pub enum QuarantineCommands {
    /// Show the alert subject and lock.
    Status {
        #[arg(long)]
        pokemon: Option<String>,
    },
    /// Delete every entry and clear the lock.
    Purge {
        #[arg(long)]
        pokemon: Option<String>,
    },
    /// Clear the lock and open the locked entry.
    Restore {
        #[arg(long)]
        pokemon: Option<String>,
    },
    /// Keep the lock and return to the catalog.
    Keep {
        #[arg(long)]
        pokemon: Option<String>,
    },
}
