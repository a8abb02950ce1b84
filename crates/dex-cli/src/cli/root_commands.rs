use clap::{Args, Subcommand};
use dex_core::{BaseStats, EntryName, NewEntry, Stat};

use crate::cli::subcommands::{LockCommands, QuarantineCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List one page of the catalog.
    List(ListArgs),
    /// Search the catalog by english or french name.
    Search(SearchArgs),
    /// Show an entry with its audit trail.
    Show(ShowArgs),
    /// Replace stats of an entry.
    Edit(EditArgs),
    /// Create an entry.
    Create(CreateArgs),
    /// Delete an entry.
    Delete(NameArgs),
    /// Toggle simulated corruption on an entry.
    #[command(name = "toggle-corruption")]
    ToggleCorruption(NameArgs),
    /// Integrity alert screen.
    Quarantine {
        #[command(subcommand)]
        action: QuarantineCommands,
    },
    /// Inspect or clear the persisted integrity lock.
    Lock {
        #[command(subcommand)]
        action: LockCommands,
    },
    /// Open a route path such as `/pokemonDetails/Pikachu`.
    Open(OpenArgs),
}

/// Arguments for `dex list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Page number, starting at 0.
    #[arg(long, default_value_t = 0)]
    pub page: u32,
}

/// Arguments for `dex search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Name fragment. Blank lists page 0.
    #[arg(required_unless_present = "interactive")]
    pub query: Option<String>,
    /// Read successive queries from stdin, one per line.
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

/// Arguments for `dex show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Canonical (english) name.
    pub name: String,
    /// Max audit records to show.
    #[arg(long)]
    pub audit_limit: Option<u32>,
}

/// Arguments for `dex edit`.
#[derive(Clone, Debug, Args)]
pub struct EditArgs {
    /// Canonical (english) name.
    pub name: String,
    /// Stat assignment such as `hp=45` or `"Sp. Attack=65"`. Repeatable.
    #[arg(long = "stat", value_parser = parse_stat_assignment, required = true)]
    pub stats: Vec<(Stat, u16)>,
}

/// Arguments for `dex create`.
#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub english: String,
    /// Defaults to the english name.
    #[arg(long)]
    pub french: Option<String>,
    /// Type tag. Give one or two.
    #[arg(long = "type", required = true)]
    pub types: Vec<String>,
    #[arg(long)]
    pub hp: u16,
    #[arg(long)]
    pub attack: u16,
    #[arg(long)]
    pub defense: u16,
    #[arg(long)]
    pub sp_attack: u16,
    #[arg(long)]
    pub sp_defense: u16,
    #[arg(long)]
    pub speed: u16,
    /// Image URL.
    #[arg(long)]
    pub image: String,
    #[arg(long)]
    pub integrity_hash: Option<String>,
}

impl CreateArgs {
    #[must_use]
    pub fn to_new_entry(&self) -> NewEntry {
        NewEntry {
            name: EntryName {
                english: self.english.clone(),
                french: self.french.clone().unwrap_or_else(|| self.english.clone()),
            },
            types: self.types.clone(),
            base: BaseStats {
                hp: self.hp,
                attack: self.attack,
                defense: self.defense,
                sp_attack: self.sp_attack,
                sp_defense: self.sp_defense,
                speed: self.speed,
            },
            image: self.image.clone(),
            integrity_hash: self.integrity_hash.clone(),
        }
    }
}

/// A command taking one entry name.
#[derive(Clone, Debug, Args)]
pub struct NameArgs {
    /// Canonical (english) name.
    pub name: String,
}

/// Arguments for `dex open`.
#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Route path.
    pub route: String,
}

fn parse_stat_assignment(raw: &str) -> Result<(Stat, u16), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected STAT=VALUE, got '{raw}'"))?;
    let stat = key.trim().parse::<Stat>().map_err(|e| e.to_string())?;
    let value = value
        .trim()
        .parse::<u16>()
        .map_err(|e| format!("invalid value for {stat}: {e}"))?;
    Ok((stat, value))
}
