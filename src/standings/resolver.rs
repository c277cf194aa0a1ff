use log::{error, warn};

use super::types::{Notice, Resolution, ResolvedMatch, Side, WinCategory};
use crate::domain::{SetScore, ValidatedMatch};
use crate::errors::ResolutionError;

/// Sets a side must take to win the match
pub const SETS_TO_WIN: u32 = 2;

/// Target score of a deciding set
const DECIDING_SET_TARGET: u32 = 15;

#[derive(Debug, Default)]
struct Tally {
    team1_sets: u32,
    team2_sets: u32,
    team1_points: u32,
    team2_points: u32,
}

impl Tally {
    /// Team1 takes the set only on a strictly higher score; a tie goes to team2
    fn add_set(&mut self, set: SetScore) -> Result<(), ResolutionError> {
        let overflow = || ResolutionError::CounterOverflow("this match".to_string());
        self.team1_points = self.team1_points.checked_add(set.team1).ok_or_else(overflow)?;
        self.team2_points = self.team2_points.checked_add(set.team2).ok_or_else(overflow)?;

        if set.team1 > set.team2 {
            self.team1_sets += 1;
        } else {
            self.team2_sets += 1;
        }
        Ok(())
    }

    fn is_decided(&self) -> bool {
        self.team1_sets >= SETS_TO_WIN || self.team2_sets >= SETS_TO_WIN
    }
}

pub fn resolve_match(validated: &ValidatedMatch) -> Result<Resolution, ResolutionError> {
    resolve(validated.set1, validated.set2, validated.set3)
}

/// Derive sets won, scoring points and the win category from set scores
pub fn resolve(
    set1: SetScore,
    set2: SetScore,
    set3: Option<SetScore>,
) -> Result<Resolution, ResolutionError> {
    let mut tally = Tally::default();
    let mut notices = Vec::new();

    tally.add_set(set1)?;
    tally.add_set(set2)?;

    if !tally.is_decided() {
        let deciding = set3.ok_or(ResolutionError::Set3Required)?;
        if is_non_standard_deciding_set(deciding) {
            warn!(
                "Set 3 score {}-{} might not reflect standard win conditions, proceeding",
                deciding.team1, deciding.team2
            );
            notices.push(Notice::NonStandardSet3 {
                team1: deciding.team1,
                team2: deciding.team2,
            });
        }
        tally.add_set(deciding)?;
    } else if set3.is_some() {
        warn!("Set 3 scores supplied for a match already decided after two sets, ignoring them");
        notices.push(Notice::Set3Ignored);
    }

    let result = classify(&tally)?;
    Ok(Resolution { result, notices })
}

fn is_non_standard_deciding_set(set: SetScore) -> bool {
    let both_short = set.team1 < DECIDING_SET_TARGET && set.team2 < DECIDING_SET_TARGET;
    let tied = set.team1 == set.team2;
    let narrow = set.team1.abs_diff(set.team2) < 2
        && (set.team1 >= DECIDING_SET_TARGET - 1 || set.team2 >= DECIDING_SET_TARGET - 1);
    both_short || tied || narrow
}

fn classify(tally: &Tally) -> Result<ResolvedMatch, ResolutionError> {
    let (winner, winner_sets, loser_sets) = if tally.team1_sets > tally.team2_sets {
        (Side::Team1, tally.team1_sets, tally.team2_sets)
    } else {
        (Side::Team2, tally.team2_sets, tally.team1_sets)
    };

    let consistent = winner_sets == SETS_TO_WIN
        && loser_sets < SETS_TO_WIN
        && winner_sets + loser_sets < 2 * SETS_TO_WIN;
    if !consistent {
        error!(
            "Resolved set count {}-{} is inconsistent, aborting update",
            winner_sets, loser_sets
        );
        return Err(ResolutionError::InvariantViolation {
            winner: winner_sets,
            loser: loser_sets,
        });
    }

    let category = if loser_sets == 0 {
        WinCategory::StraightOrFourSet
    } else {
        WinCategory::FiveSet
    };

    Ok(ResolvedMatch {
        team1_sets: tally.team1_sets,
        team2_sets: tally.team2_sets,
        team1_points: tally.team1_points,
        team2_points: tally.team2_points,
        winner,
        category,
    })
}
