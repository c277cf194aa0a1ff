//! Terminal and JSON output for the CLI.
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::domain::TeamRecord;
use crate::services::standings::{GroupStandings, MatchOutcome};
use crate::standings::{Notice, StandingsRow};

/// Print a group table
pub fn print_table(group: &str, rows: &[StandingsRow]) {
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    println!("{}", format!("Group {}", group).bold());
    println!(
        "{}",
        format!(
            " # | {:<name_width$} |  P | 3-0/3-1 | 3-2 | 2-3 | 0-3/1-3 |  Sets | Set Ratio | Pt Ratio | Pts",
            "Team"
        )
        .bold()
    );
    println!("---|-{}-|----|---------|-----|-----|---------|-------|-----------|----------|----", "-".repeat(name_width));

    for row in rows {
        println!(
            "{:>2} | {:<name_width$} | {:>2} | {:>7} | {:>3} | {:>3} | {:>7} | {:>5} | {:>9} | {:>8} | {}",
            row.rank,
            row.name,
            row.played,
            row.wins30_31,
            row.wins32,
            row.losses23,
            row.losses03_13,
            row.sets,
            row.set_ratio,
            row.point_ratio,
            format!("{:>3}", row.points).bold(),
        );
    }
    println!();
}

pub fn print_all(groups: &[GroupStandings]) {
    for group in groups {
        print_table(&group.group, &group.rows);
    }
}

pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        println!("{} {}", "warning:".yellow().bold(), notice);
    }
}

pub fn print_outcome(outcome: &MatchOutcome) {
    print_notices(&outcome.notices);
    println!(
        "{} sets {}-{}",
        "Match result added successfully!".green(),
        outcome.result.team1_sets,
        outcome.result.team2_sets
    );
    println!();
    print_table(&outcome.group, &outcome.standings);
}

pub fn print_teams(group: &str, teams: &[TeamRecord]) {
    println!("{}", format!("Group {}", group).bold());
    for team in teams {
        println!("  {:<4} {}", team.id, team.name);
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
