use serde::{Deserialize, Serialize};

/// Statistics for one team within its group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: String,
    pub name: String,
    pub played: u32,
    #[serde(rename = "wins30_31")]
    pub wins30_31: u32, // 3-0 or 3-1 wins, 3 points
    pub wins32: u32,    // 3-2 wins, 2 points
    pub losses23: u32,  // 2-3 losses, 1 point
    #[serde(rename = "losses03_13")]
    pub losses03_13: u32, // 0-3 or 1-3 losses, 0 points
    pub sets_won: u32,
    pub sets_lost: u32,
    #[serde(default)]
    pub points_for: u32,
    #[serde(default)]
    pub points_against: u32,
    pub points: u32,
}

impl TeamRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            played: 0,
            wins30_31: 0,
            wins32: 0,
            losses23: 0,
            losses03_13: 0,
            sets_won: 0,
            sets_lost: 0,
            points_for: 0,
            points_against: 0,
            points: 0,
        }
    }

    pub fn total_wins(&self) -> u32 {
        self.wins30_31 + self.wins32
    }

    /// League points implied by the win/loss counters
    pub fn expected_points(&self) -> u32 {
        3 * self.wins30_31 + 2 * self.wins32 + self.losses23
    }

    /// Whether `played` and `points` agree with the win/loss counters
    pub fn is_consistent(&self) -> bool {
        self.played == self.wins30_31 + self.wins32 + self.losses23 + self.losses03_13
            && self.points == self.expected_points()
    }
}

/// Score of one set, team1 first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub team1: u32,
    pub team2: u32,
}

impl SetScore {
    pub fn new(team1: u32, team2: u32) -> Self {
        Self { team1, team2 }
    }
}

/// Raw score pair for one set as entered; `None` means left blank
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    #[serde(default)]
    pub team1: Option<f64>,
    #[serde(default)]
    pub team2: Option<f64>,
}

impl SetEntry {
    pub fn new(team1: Option<f64>, team2: Option<f64>) -> Self {
        Self { team1, team2 }
    }

    pub fn scores(team1: u32, team2: u32) -> Self {
        Self::new(Some(team1 as f64), Some(team2 as f64))
    }
}

/// One submitted match result before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInput {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub team1: String,
    #[serde(default)]
    pub team2: String,
    #[serde(default)]
    pub set1: SetEntry,
    #[serde(default)]
    pub set2: SetEntry,
    #[serde(default)]
    pub set3: SetEntry,
}

/// A match input that passed structural validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMatch {
    pub group: String,
    pub team1: String,
    pub team2: String,
    pub set1: SetScore,
    pub set2: SetScore,
    pub set3: Option<SetScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_record_field_names() {
        let team = TeamRecord::new("A0", "Ekaavdhani Knights");
        let json = serde_json::to_value(&team).unwrap();

        assert!(json.get("wins30_31").is_some());
        assert!(json.get("losses03_13").is_some());
        assert!(json.get("setsWon").is_some());
        assert!(json.get("pointsAgainst").is_some());
    }

    #[test]
    fn test_missing_point_totals_default_to_zero() {
        let json = r#"{
            "id": "A1", "name": "Purshottam Hawk", "played": 1,
            "wins30_31": 1, "wins32": 0, "losses23": 0, "losses03_13": 0,
            "setsWon": 2, "setsLost": 0, "points": 3
        }"#;

        let team: TeamRecord = serde_json::from_str(json).unwrap();
        assert_eq!(team.points_for, 0);
        assert_eq!(team.points_against, 0);
        assert!(team.is_consistent());
    }
}
