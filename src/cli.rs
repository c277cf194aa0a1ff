use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::StorageBackend;
use crate::domain::SetEntry;

#[derive(Parser, Debug)]
#[command(author, version, about = "volleyball group standings")]
pub struct Cli {
    /// Where tournament data is stored
    #[arg(long, global = true, value_enum, default_value_t = StorageBackend::Sqlite)]
    pub store: StorageBackend,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the standings server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Record a match result, scores given as TEAM1:TEAM2
    Record {
        #[arg(short, long)]
        group: String,
        #[arg(long)]
        team1: String,
        #[arg(long)]
        team2: String,
        #[arg(long, value_parser = parse_set_entry, allow_hyphen_values = true)]
        set1: SetEntry,
        #[arg(long, value_parser = parse_set_entry, allow_hyphen_values = true)]
        set2: SetEntry,
        /// Deciding set, only when the first two sets were split
        #[arg(long, value_parser = parse_set_entry, allow_hyphen_values = true)]
        set3: Option<SetEntry>,
    },
    /// Print the ranked table of one group, or of every group
    Standings {
        #[arg(short, long)]
        group: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the teams of a group with their ids
    Teams {
        #[arg(short, long)]
        group: String,
    },
    /// Erase all results and restore the default roster
    Reset {
        /// Confirm the reset; it cannot be undone
        #[arg(long)]
        yes: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Parse `25:20`; a blank side (`15:`) is kept as missing for validation
pub fn parse_set_entry(value: &str) -> Result<SetEntry, String> {
    let (team1, team2) = value
        .split_once(':')
        .ok_or_else(|| format!("expected scores as TEAM1:TEAM2, got '{}'", value))?;

    Ok(SetEntry::new(parse_score(team1)?, parse_score(team2)?))
}

fn parse_score(value: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("invalid score '{}'", trimmed))
}
