use crate::domain::{MatchInput, SetEntry, SetScore, ValidatedMatch};
use crate::errors::ValidationError;

/// Highest score accepted for one side of a set
pub const MAX_SET_SCORE: u32 = u16::MAX as u32;

/// Check a submitted match for structural validity. First failing rule wins.
///
/// Tied set scores pass; the resolver decides them.
pub fn validate(input: &MatchInput) -> Result<ValidatedMatch, ValidationError> {
    let group = required_selection(&input.group)?;
    let team1 = required_selection(&input.team1)?;
    let team2 = required_selection(&input.team2)?;

    if team1 == team2 {
        return Err(ValidationError::DuplicateTeam);
    }

    let set1 = required_set(&input.set1)?;
    let set2 = required_set(&input.set2)?;
    let set3 = optional_set(&input.set3)?;

    Ok(ValidatedMatch {
        group: group.to_string(),
        team1: team1.to_string(),
        team2: team2.to_string(),
        set1,
        set2,
        set3,
    })
}

fn required_selection(value: &str) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingSelection);
    }
    Ok(trimmed)
}

fn required_set(entry: &SetEntry) -> Result<SetScore, ValidationError> {
    match (entry.team1.and_then(to_score), entry.team2.and_then(to_score)) {
        (Some(team1), Some(team2)) => Ok(SetScore::new(team1, team2)),
        _ => Err(ValidationError::InvalidRequiredSetScore),
    }
}

fn optional_set(entry: &SetEntry) -> Result<Option<SetScore>, ValidationError> {
    match (entry.team1, entry.team2) {
        (None, None) => Ok(None),
        (Some(_), None) | (None, Some(_)) => Err(ValidationError::IncompleteSet3),
        (Some(team1), Some(team2)) => match (to_score(team1), to_score(team2)) {
            (Some(team1), Some(team2)) => Ok(Some(SetScore::new(team1, team2))),
            _ => Err(ValidationError::InvalidSet3Score),
        },
    }
}

/// Non-negative whole number no greater than `MAX_SET_SCORE`
fn to_score(value: f64) -> Option<u32> {
    let integral = value.is_finite() && value.fract() == 0.0;
    if integral && value >= 0.0 && value <= MAX_SET_SCORE as f64 {
        Some(value as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> MatchInput {
        MatchInput {
            group: "A".to_string(),
            team1: "A0".to_string(),
            team2: "A1".to_string(),
            set1: SetEntry::scores(25, 20),
            set2: SetEntry::scores(25, 18),
            set3: SetEntry::default(),
        }
    }

    #[test]
    fn test_valid_two_set_match() {
        let validated = validate(&input()).unwrap();

        assert_eq!(validated.set1, SetScore::new(25, 20));
        assert_eq!(validated.set2, SetScore::new(25, 18));
        assert_eq!(validated.set3, None);
    }

    #[test]
    fn test_missing_selection() {
        for blank in ["", "   "] {
            let mut m = input();
            m.team2 = blank.to_string();
            assert_eq!(validate(&m), Err(ValidationError::MissingSelection));
        }

        let mut m = input();
        m.group.clear();
        m.team1 = "A1".to_string();
        // Missing selection is checked before the duplicate rule
        assert_eq!(validate(&m), Err(ValidationError::MissingSelection));
    }

    #[test]
    fn test_duplicate_team() {
        let mut m = input();
        m.team2 = "A0".to_string();
        assert_eq!(validate(&m), Err(ValidationError::DuplicateTeam));
    }

    #[test]
    fn test_invalid_required_scores() {
        let bad_entries = [
            SetEntry::new(Some(25.0), None),
            SetEntry::new(Some(-1.0), Some(25.0)),
            SetEntry::new(Some(24.5), Some(25.0)),
            SetEntry::new(Some(f64::NAN), Some(25.0)),
        ];

        for entry in bad_entries {
            let mut m = input();
            m.set2 = entry;
            assert_eq!(validate(&m), Err(ValidationError::InvalidRequiredSetScore));
        }
    }

    #[test]
    fn test_scores_above_limit_are_rejected() {
        let limit = MAX_SET_SCORE as f64;

        let mut m = input();
        m.set1 = SetEntry::new(Some(limit), Some(0.0));
        assert!(validate(&m).is_ok());

        for too_high in [limit + 1.0, u32::MAX as f64, 1e300] {
            let mut m = input();
            m.set1 = SetEntry::new(Some(too_high), Some(0.0));
            assert_eq!(validate(&m), Err(ValidationError::InvalidRequiredSetScore));

            let mut m = input();
            m.set2 = SetEntry::new(Some(25.0), Some(20.0));
            m.set3 = SetEntry::new(Some(15.0), Some(too_high));
            assert_eq!(validate(&m), Err(ValidationError::InvalidSet3Score));
        }
    }

    #[test]
    fn test_incomplete_set3() {
        let mut m = input();
        m.set3 = SetEntry::new(None, Some(15.0));
        assert_eq!(validate(&m), Err(ValidationError::IncompleteSet3));

        // Incompleteness is reported even when the present score is invalid
        m.set3 = SetEntry::new(Some(-3.0), None);
        assert_eq!(validate(&m), Err(ValidationError::IncompleteSet3));
    }

    #[test]
    fn test_invalid_set3_score() {
        let mut m = input();
        m.set3 = SetEntry::new(Some(15.0), Some(-2.0));
        assert_eq!(validate(&m), Err(ValidationError::InvalidSet3Score));
    }

    #[test]
    fn test_tied_set_is_structurally_valid() {
        let mut m = input();
        m.set1 = SetEntry::scores(25, 25);
        assert!(validate(&m).is_ok());
    }
}
