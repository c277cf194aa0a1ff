pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod output;
pub mod persistence;
pub mod services;
pub mod standings;

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::config::StorageBackend;
use crate::domain::{MatchInput, SetEntry};
use crate::services::server::ServerService;
use crate::services::standings::StandingsService;

pub fn interpret() -> Cli {
    Cli::parse()
}

fn build_config(store: StorageBackend) -> AppConfig {
    AppConfig::new().with_backend(store)
}

pub fn handle_serve(port: u16, store: StorageBackend) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, build_config(store));
        service.run().await
    })
}

pub fn handle_record(
    store: StorageBackend,
    group: &str,
    team1: &str,
    team2: &str,
    set1: SetEntry,
    set2: SetEntry,
    set3: Option<SetEntry>,
) -> Result<()> {
    let mut service = StandingsService::new(build_config(store))?;
    let input = MatchInput {
        group: group.to_string(),
        team1: team1.to_string(),
        team2: team2.to_string(),
        set1,
        set2,
        set3: set3.unwrap_or_default(),
    };

    let outcome = service.record_match(&input)?;
    output::print_outcome(&outcome);
    Ok(())
}

pub fn handle_standings(store: StorageBackend, group: Option<&str>, json: bool) -> Result<()> {
    let service = StandingsService::new(build_config(store))?;

    match group {
        Some(group) => {
            let Some(rows) = service.standings(group) else {
                bail!("Unknown group: {}", group);
            };
            if json {
                output::print_json(&rows)
            } else {
                output::print_table(group, &rows);
                Ok(())
            }
        }
        None => {
            let groups = service.all_standings();
            if json {
                output::print_json(&groups)
            } else {
                output::print_all(&groups);
                Ok(())
            }
        }
    }
}

pub fn handle_teams(store: StorageBackend, group: &str) -> Result<()> {
    let service = StandingsService::new(build_config(store))?;
    let Some(teams) = service.teams(group) else {
        bail!("Unknown group: {}", group);
    };
    output::print_teams(group, &teams);
    Ok(())
}

pub fn handle_reset(store: StorageBackend, confirmed: bool) -> Result<()> {
    if !confirmed {
        bail!("Resetting erases ALL tournament data and cannot be undone. Re-run with --yes to confirm.");
    }

    let mut service = StandingsService::new(build_config(store))?;
    service.reset()?;
    println!("All data has been reset.");
    output::print_all(&service.all_standings());
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
