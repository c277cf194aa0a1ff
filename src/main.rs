use anyhow::Result;

use volleyball_standings::cli::{Cli, Command};
use volleyball_standings::{
    handle_completions, handle_record, handle_reset, handle_serve, handle_standings, handle_teams,
    interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let store = cli.store;
    match &cli.command {
        Command::Serve { port } => handle_serve(*port, store),
        Command::Record {
            group,
            team1,
            team2,
            set1,
            set2,
            set3,
        } => handle_record(store, group, team1, team2, *set1, *set2, *set3),
        Command::Standings { group, json } => handle_standings(store, group.as_deref(), *json),
        Command::Teams { group } => handle_teams(store, group),
        Command::Reset { yes } => handle_reset(store, *yes),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
