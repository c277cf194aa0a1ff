pub mod ranking;
pub mod ratio;
pub mod resolver;
pub mod table;
pub mod types;
pub mod updater;
pub mod validation;

pub use ranking::{compare_names, compare_teams, rank_teams};
pub use ratio::{format_ratio, ratio};
pub use resolver::{resolve, resolve_match, SETS_TO_WIN};
pub use table::{standings_rows, StandingsRow};
pub use types::{Notice, Resolution, ResolvedMatch, Side, WinCategory};
pub use updater::apply_result;
pub use validation::validate;

use crate::domain::{MatchInput, Snapshot};
use crate::errors::EngineError;

/// Validate, resolve and apply one match to the snapshot.
///
/// On any error the snapshot is left exactly as it was.
pub fn record_match(snapshot: &mut Snapshot, input: &MatchInput) -> Result<Resolution, EngineError> {
    let validated = validate(input)?;
    let (team1, team2) =
        snapshot.team_pair_mut(&validated.group, &validated.team1, &validated.team2)?;
    let resolution = resolve_match(&validated)?;
    apply_result(team1, team2, &resolution.result)?;
    Ok(resolution)
}
