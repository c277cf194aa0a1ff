use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Team1,
    Team2,
}

/// How the match was won, which decides the league points awarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WinCategory {
    /// Loser took no set: 3 points to the winner, 0 to the loser
    StraightOrFourSet,
    /// Decided in the final set: 2 points to the winner, 1 to the loser
    FiveSet,
}

impl WinCategory {
    /// League points as (winner, loser)
    pub fn league_points(&self) -> (u32, u32) {
        match self {
            WinCategory::StraightOrFourSet => (3, 0),
            WinCategory::FiveSet => (2, 1),
        }
    }
}

/// Non-fatal remarks produced while resolving a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Notice {
    Set3Ignored,
    NonStandardSet3 { team1: u32, team2: u32 },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Set3Ignored => write!(
                f,
                "Set 3 scores entered, but one team already won 2-0. Set 3 scores ignored."
            ),
            Notice::NonStandardSet3 { team1, team2 } => write!(
                f,
                "Set 3 score {}-{} might not reflect standard win conditions (win by 2 from 15 points).",
                team1, team2
            ),
        }
    }
}

/// Sets and scoring points that counted for each side of one match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMatch {
    pub team1_sets: u32,
    pub team2_sets: u32,
    pub team1_points: u32,
    pub team2_points: u32,
    pub winner: Side,
    pub category: WinCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub result: ResolvedMatch,
    pub notices: Vec<Notice>,
}
