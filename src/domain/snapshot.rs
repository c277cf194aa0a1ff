use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::models::TeamRecord;
use crate::config::GroupRoster;
use crate::errors::{PersistenceError, ValidationError};

/// Full tournament state: team records per group, in stored order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub teams: BTreeMap<String, Vec<TeamRecord>>,
}

impl Snapshot {
    /// Fresh snapshot with every registered team and all statistics zeroed
    pub fn from_roster(roster: &[GroupRoster]) -> Self {
        let teams = roster
            .iter()
            .map(|group| {
                let records = group
                    .team_ids()
                    .map(|(id, name)| TeamRecord::new(id, name))
                    .collect();
                (group.id.to_string(), records)
            })
            .collect();

        Self { teams }
    }

    /// Strictly parse a stored blob, requiring every group in `required_groups`
    pub fn from_json<'a>(
        json: &str,
        required_groups: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, PersistenceError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.check_structure(required_groups)?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn check_structure<'a>(
        &self,
        required_groups: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), PersistenceError> {
        for group in required_groups {
            if !self.teams.contains_key(group) {
                return Err(PersistenceError::MissingGroup(group.to_string()));
            }
        }

        for (group, records) in &self.teams {
            let mut seen = HashSet::new();
            for record in records {
                if !seen.insert(record.id.as_str()) {
                    return Err(PersistenceError::DuplicateTeamId {
                        group: group.clone(),
                        id: record.id.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(String::as_str)
    }

    pub fn group(&self, group: &str) -> Option<&[TeamRecord]> {
        self.teams.get(group).map(Vec::as_slice)
    }

    pub fn find_team(&self, group: &str, team_id: &str) -> Option<&TeamRecord> {
        self.group(group)?.iter().find(|t| t.id == team_id)
    }

    /// Borrow two distinct teams of one group mutably at the same time
    pub fn team_pair_mut(
        &mut self,
        group: &str,
        team1_id: &str,
        team2_id: &str,
    ) -> Result<(&mut TeamRecord, &mut TeamRecord), ValidationError> {
        if team1_id == team2_id {
            return Err(ValidationError::DuplicateTeam);
        }

        let records = self
            .teams
            .get_mut(group)
            .ok_or_else(|| ValidationError::UnknownGroup(group.to_string()))?;

        let first = position_of(records, group, team1_id)?;
        let second = position_of(records, group, team2_id)?;

        if first < second {
            let (head, tail) = records.split_at_mut(second);
            Ok((&mut head[first], &mut tail[0]))
        } else {
            let (head, tail) = records.split_at_mut(first);
            Ok((&mut tail[0], &mut head[second]))
        }
    }
}

fn position_of(records: &[TeamRecord], group: &str, team_id: &str) -> Result<usize, ValidationError> {
    records
        .iter()
        .position(|t| t.id == team_id)
        .ok_or_else(|| ValidationError::UnknownTeam {
            group: group.to_string(),
            team: team_id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_roster;

    fn snapshot() -> Snapshot {
        Snapshot::from_roster(&default_roster())
    }

    #[test]
    fn test_default_snapshot_has_two_groups_of_seven() {
        let snapshot = snapshot();

        assert_eq!(snapshot.group_ids().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(snapshot.group("A").map(<[_]>::len), Some(7));
        assert_eq!(snapshot.group("B").map(<[_]>::len), Some(7));
        assert!(snapshot.teams.values().flatten().all(|t| t.played == 0 && t.points == 0));
    }

    #[test]
    fn test_from_json_rejects_missing_group() {
        let json = r#"{"teams": {"A": []}}"#;
        let err = Snapshot::from_json(json, ["A", "B"]).unwrap_err();

        assert!(matches!(err, PersistenceError::MissingGroup(g) if g == "B"));
    }

    #[test]
    fn test_from_json_rejects_malformed_team() {
        let json = r#"{"teams": {"A": [{"id": "A0"}], "B": []}}"#;
        let err = Snapshot::from_json(json, ["A", "B"]).unwrap_err();

        assert!(matches!(err, PersistenceError::Malformed(_)));
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let mut snapshot = snapshot();
        let copy = snapshot.teams["A"][0].clone();
        snapshot.teams.get_mut("A").unwrap().push(copy);

        let json = snapshot.to_json().unwrap();
        let err = Snapshot::from_json(&json, ["A", "B"]).unwrap_err();

        assert!(matches!(err, PersistenceError::DuplicateTeamId { id, .. } if id == "A0"));
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let snapshot = snapshot();
        let json = snapshot.to_json().unwrap();

        assert_eq!(Snapshot::from_json(&json, ["A", "B"]).unwrap(), snapshot);
    }

    #[test]
    fn test_team_pair_mut_in_either_order() {
        let mut snapshot = snapshot();

        let (a, b) = snapshot.team_pair_mut("A", "A5", "A2").unwrap();
        assert_eq!((a.id.as_str(), b.id.as_str()), ("A5", "A2"));

        let (a, b) = snapshot.team_pair_mut("A", "A0", "A6").unwrap();
        assert_eq!((a.id.as_str(), b.id.as_str()), ("A0", "A6"));
    }

    #[test]
    fn test_team_pair_mut_errors() {
        let mut snapshot = snapshot();

        assert_eq!(
            snapshot.team_pair_mut("C", "C0", "C1").unwrap_err(),
            ValidationError::UnknownGroup("C".to_string())
        );
        assert_eq!(
            snapshot.team_pair_mut("A", "A0", "B1").unwrap_err(),
            ValidationError::UnknownTeam { group: "A".to_string(), team: "B1".to_string() }
        );
        assert_eq!(
            snapshot.team_pair_mut("A", "A0", "A0").unwrap_err(),
            ValidationError::DuplicateTeam
        );
    }
}
