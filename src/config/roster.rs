/// Canonical team list for one group.
///
/// Team ids are derived from the group id and the position in `names`
/// (`A0`, `A1`, ...), so they stay stable across resets.
#[derive(Debug, Clone)]
pub struct GroupRoster {
    pub id: &'static str,
    pub names: Vec<&'static str>,
}

impl GroupRoster {
    pub fn new(id: &'static str, names: Vec<&'static str>) -> Self {
        Self { id, names }
    }

    pub fn team_ids(&self) -> impl Iterator<Item = (String, &'static str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (format!("{}{}", self.id, index), *name))
    }
}

/// Get the registered teams of the reference deployment
pub fn default_roster() -> Vec<GroupRoster> {
    vec![
        GroupRoster::new(
            "A",
            vec![
                "Ekaavdhani Knights",
                "Purshottam Hawk",
                "Samarpan Strom",
                "Surveer Spartans",
                "Prapti Pioneers",
                "Bhulku Flights",
                "Akshar Royal",
            ],
        ),
        GroupRoster::new(
            "B",
            vec![
                "Sarvam Spikers",
                "Dazzling Das",
                "Satsangi Lions",
                "Ekantik Eagle",
                "Jagrat Lions",
                "Prabodham Titans",
                "Nishchay Tigers",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_ids_follow_group_prefix() {
        let roster = default_roster();
        let ids: Vec<String> = roster[1].team_ids().map(|(id, _)| id).collect();

        assert_eq!(ids.first().map(String::as_str), Some("B0"));
        assert_eq!(ids.last().map(String::as_str), Some("B6"));
    }
}
