use std::cmp::Ordering;

use super::ratio::ratio;
use crate::domain::TeamRecord;

pub fn set_ratio(team: &TeamRecord) -> f64 {
    ratio(team.sets_won, team.sets_lost)
}

pub fn point_ratio(team: &TeamRecord) -> f64 {
    ratio(team.points_for, team.points_against)
}

/// Order teams best first. Each key only breaks ties left by the previous one:
/// league points, total wins, set ratio, point ratio, sets won, points for,
/// then name ascending.
pub fn compare_teams(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.total_wins().cmp(&a.total_wins()))
        .then_with(|| set_ratio(b).total_cmp(&set_ratio(a)))
        .then_with(|| point_ratio(b).total_cmp(&point_ratio(a)))
        .then_with(|| b.sets_won.cmp(&a.sets_won))
        .then_with(|| b.points_for.cmp(&a.points_for))
        .then_with(|| compare_names(&a.name, &b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Case-insensitive alphabetical order, with byte order between names that
/// differ only in case
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Return a ranked copy of one group's teams; the input order is untouched
pub fn rank_teams(teams: &[TeamRecord]) -> Vec<TeamRecord> {
    let mut ranked = teams.to_vec();
    ranked.sort_by(compare_teams);
    ranked
}
