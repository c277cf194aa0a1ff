use serde::Serialize;

use super::ranking::{point_ratio, rank_teams, set_ratio};
use super::ratio::format_ratio;
use crate::domain::TeamRecord;

/// One rendered line of a group table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub played: u32,
    #[serde(rename = "wins30_31")]
    pub wins30_31: u32,
    pub wins32: u32,
    pub losses23: u32,
    #[serde(rename = "losses03_13")]
    pub losses03_13: u32,
    pub sets: String,
    pub set_ratio: String,
    pub point_ratio: String,
    pub points: u32,
}

impl StandingsRow {
    pub fn new(rank: usize, team: &TeamRecord) -> Self {
        Self {
            rank,
            id: team.id.clone(),
            name: team.name.clone(),
            played: team.played,
            wins30_31: team.wins30_31,
            wins32: team.wins32,
            losses23: team.losses23,
            losses03_13: team.losses03_13,
            sets: format!("{}-{}", team.sets_won, team.sets_lost),
            set_ratio: format_ratio(set_ratio(team)),
            point_ratio: format_ratio(point_ratio(team)),
            points: team.points,
        }
    }
}

/// Rank a group and derive its display rows, rank starting at 1
pub fn standings_rows(teams: &[TeamRecord]) -> Vec<StandingsRow> {
    rank_teams(teams)
        .iter()
        .enumerate()
        .map(|(idx, team)| StandingsRow::new(idx + 1, team))
        .collect()
}
