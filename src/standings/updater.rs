use super::types::{ResolvedMatch, Side, WinCategory};
use crate::domain::TeamRecord;
use crate::errors::ResolutionError;

/// Apply a resolved match to both teams.
///
/// Both records are computed first and written together, so a caller never
/// observes one side updated without the other. A counter that would overflow
/// leaves both records untouched. Re-applying the same result counts the
/// match twice.
pub fn apply_result(
    team1: &mut TeamRecord,
    team2: &mut TeamRecord,
    result: &ResolvedMatch,
) -> Result<(), ResolutionError> {
    let team1_won = result.winner == Side::Team1;

    let updated1 = with_match(
        team1,
        Line {
            sets_won: result.team1_sets,
            sets_lost: result.team2_sets,
            points_for: result.team1_points,
            points_against: result.team2_points,
            won: team1_won,
        },
        result.category,
    )?;
    let updated2 = with_match(
        team2,
        Line {
            sets_won: result.team2_sets,
            sets_lost: result.team1_sets,
            points_for: result.team2_points,
            points_against: result.team1_points,
            won: !team1_won,
        },
        result.category,
    )?;

    *team1 = updated1;
    *team2 = updated2;
    Ok(())
}

/// One team's view of a match
struct Line {
    sets_won: u32,
    sets_lost: u32,
    points_for: u32,
    points_against: u32,
    won: bool,
}

fn with_match(
    team: &TeamRecord,
    line: Line,
    category: WinCategory,
) -> Result<TeamRecord, ResolutionError> {
    let add = |counter: u32, amount: u32| {
        counter
            .checked_add(amount)
            .ok_or_else(|| ResolutionError::CounterOverflow(team.id.clone()))
    };

    let (winner_points, loser_points) = category.league_points();
    let mut next = team.clone();
    next.played = add(next.played, 1)?;
    next.sets_won = add(next.sets_won, line.sets_won)?;
    next.sets_lost = add(next.sets_lost, line.sets_lost)?;
    next.points_for = add(next.points_for, line.points_for)?;
    next.points_against = add(next.points_against, line.points_against)?;
    next.points = add(next.points, if line.won { winner_points } else { loser_points })?;

    match (line.won, category) {
        (true, WinCategory::StraightOrFourSet) => next.wins30_31 = add(next.wins30_31, 1)?,
        (true, WinCategory::FiveSet) => next.wins32 = add(next.wins32, 1)?,
        (false, WinCategory::FiveSet) => next.losses23 = add(next.losses23, 1)?,
        (false, WinCategory::StraightOrFourSet) => next.losses03_13 = add(next.losses03_13, 1)?,
    }

    Ok(next)
}
