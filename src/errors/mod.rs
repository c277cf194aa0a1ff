use thiserror::Error;

/// Input problems the user can fix and resubmit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select group and both teams.")]
    MissingSelection,

    #[error("Team 1 and Team 2 cannot be the same.")]
    DuplicateTeam,

    #[error("Please enter valid, non-negative scores for Set 1 and Set 2.")]
    InvalidRequiredSetScore,

    #[error("Please enter scores for both teams for Set 3, or leave both blank.")]
    IncompleteSet3,

    #[error("Please enter valid, non-negative scores for Set 3 if played.")]
    InvalidSet3Score,

    #[error("Unknown group: {0}")]
    UnknownGroup(String),

    #[error("Team {team} not found in group {group}")]
    UnknownTeam { group: String, team: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("Set 3 scores are required (match was 1-1 after Set 2).")]
    Set3Required,

    #[error("Invalid final set score: {winner}-{loser}. Match result is inconsistent.")]
    InvariantViolation { winner: u32, loser: u32 },

    #[error("Score totals for {0} exceed the supported range.")]
    CounterOverflow(String),
}

/// Errors surfaced by the standings engine for a single match submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

impl EngineError {
    /// A logic defect rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            EngineError::Resolution(ResolutionError::InvariantViolation { .. })
        )
    }
}

/// Stored snapshot failed structural validation
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Snapshot is missing group {0}")]
    MissingGroup(String),

    #[error("Duplicate team id {id} in group {group}")]
    DuplicateTeamId { group: String, id: String },
}

/// Add context to storage errors
pub fn storage_context(operation: &str, key: &str) -> String {
    format!("Failed to {} snapshot for key: {}", operation, key)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_wraps_messages() {
        let err: EngineError = ValidationError::DuplicateTeam.into();
        assert_eq!(err.to_string(), "Team 1 and Team 2 cannot be the same.");
        assert!(!err.is_internal());

        let err: EngineError = ResolutionError::InvariantViolation { winner: 1, loser: 1 }.into();
        assert!(err.is_internal());
    }
}
