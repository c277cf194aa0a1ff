use anyhow::Result;
use log::{error, info};
use serde::Serialize;

use crate::config::settings::AppConfig;
use crate::domain::{MatchInput, Snapshot, TeamRecord};
use crate::errors::EngineError;
use crate::persistence::{self, SnapshotStore};
use crate::standings::{self, Notice, ResolvedMatch, StandingsRow};

/// Result of a recorded match, ready for the caller to display
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub group: String,
    pub result: ResolvedMatch,
    pub notices: Vec<Notice>,
    pub standings: Vec<StandingsRow>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStandings {
    pub group: String,
    pub rows: Vec<StandingsRow>,
}

/// Owns the current snapshot and its store; one writer at a time
pub struct StandingsService {
    config: AppConfig,
    store: Box<dyn SnapshotStore>,
    snapshot: Snapshot,
}

impl StandingsService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let store = persistence::open_store(&config.storage)?;
        Self::with_store(config, store)
    }

    pub fn with_store(config: AppConfig, store: Box<dyn SnapshotStore>) -> Result<Self> {
        let snapshot = persistence::load_or_default(store.as_ref(), &config.tournament)?;
        Ok(Self {
            config,
            store,
            snapshot,
        })
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Record one match and persist the new snapshot.
    ///
    /// Engine rejections come back as [`EngineError`] inside the `anyhow`
    /// error. Nothing changes, in memory or in the store, unless the save
    /// succeeds.
    pub fn record_match(&mut self, input: &MatchInput) -> Result<MatchOutcome> {
        let mut candidate = self.snapshot.clone();
        let resolution = match standings::record_match(&mut candidate, input) {
            Ok(resolution) => resolution,
            Err(e) => {
                if e.is_internal() {
                    error!("Match {} vs {} aborted: {}", input.team1, input.team2, e);
                }
                return Err(e.into());
            }
        };

        persistence::save_snapshot(self.store.as_ref(), &candidate)?;
        self.snapshot = candidate;

        let group = input.group.trim().to_string();
        let result = resolution.result;
        info!(
            "Recorded {} vs {} in group {}: sets {}-{}",
            input.team1.trim(),
            input.team2.trim(),
            group,
            result.team1_sets,
            result.team2_sets
        );

        let rows = self.standings(&group).unwrap_or_default();
        Ok(MatchOutcome {
            group,
            result,
            notices: resolution.notices,
            standings: rows,
        })
    }

    pub fn standings(&self, group: &str) -> Option<Vec<StandingsRow>> {
        self.snapshot.group(group).map(standings::standings_rows)
    }

    pub fn all_standings(&self) -> Vec<GroupStandings> {
        self.snapshot
            .teams
            .iter()
            .map(|(group, teams)| GroupStandings {
                group: group.clone(),
                rows: standings::standings_rows(teams),
            })
            .collect()
    }

    /// Teams of a group in alphabetical order, for pickers
    pub fn teams(&self, group: &str) -> Option<Vec<TeamRecord>> {
        let mut teams = self.snapshot.group(group)?.to_vec();
        teams.sort_by(|a, b| standings::compare_names(&a.name, &b.name));
        Some(teams)
    }

    /// Wipe all results. Callers must have confirmed with the user.
    pub fn reset(&mut self) -> Result<()> {
        self.snapshot = persistence::reset(self.store.as_ref(), &self.config.tournament)?;
        Ok(())
    }
}

/// Extract the engine rejection from a service error, if that is what it is
pub fn engine_error(err: &anyhow::Error) -> Option<&EngineError> {
    err.downcast_ref::<EngineError>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_memory_pool;
    use crate::domain::SetEntry;
    use crate::errors::ResolutionError;
    use crate::persistence::SqliteStore;
    use crate::standings::WinCategory;

    fn service() -> StandingsService {
        let store = SqliteStore::from_pool(create_memory_pool().unwrap(), "service_test").unwrap();
        StandingsService::with_store(AppConfig::new(), Box::new(store)).unwrap()
    }

    fn input(team1: &str, team2: &str, sets: [SetEntry; 3]) -> MatchInput {
        let [set1, set2, set3] = sets;
        MatchInput {
            group: "B".to_string(),
            team1: team1.to_string(),
            team2: team2.to_string(),
            set1,
            set2,
            set3,
        }
    }

    #[test]
    fn test_record_match_updates_and_persists() {
        let mut service = service();
        let outcome = service
            .record_match(&input(
                "B3",
                "B1",
                [SetEntry::scores(25, 20), SetEntry::scores(25, 18), SetEntry::default()],
            ))
            .unwrap();

        assert_eq!(outcome.result.category, WinCategory::StraightOrFourSet);
        assert_eq!(outcome.standings[0].name, "Ekantik Eagle");
        assert_eq!(outcome.standings[0].points, 3);
        // The loser's point ratio still lifts it above teams yet to play
        assert_eq!(outcome.standings[1].name, "Dazzling Das");
        assert_eq!(outcome.standings.last().map(|r| r.name.as_str()), Some("Satsangi Lions"));

        let stored = service.store.load().unwrap().unwrap();
        let reloaded = Snapshot::from_json(&stored, ["A", "B"]).unwrap();
        assert_eq!(&reloaded, service.snapshot());
    }

    #[test]
    fn test_rejected_match_is_typed_and_not_saved() {
        let mut service = service();
        let err = service
            .record_match(&input(
                "B0",
                "B1",
                [SetEntry::scores(25, 20), SetEntry::scores(22, 25), SetEntry::default()],
            ))
            .unwrap_err();

        assert_eq!(
            engine_error(&err),
            Some(&EngineError::Resolution(ResolutionError::Set3Required))
        );
        assert!(service.store.load().unwrap().is_none());
        assert!(service.snapshot().teams.values().flatten().all(|t| t.played == 0));
    }

    #[test]
    fn test_teams_sorted_by_name() {
        let service = service();
        let names: Vec<String> = service.teams("A").unwrap().into_iter().map(|t| t.name).collect();

        assert_eq!(names.first().map(String::as_str), Some("Akshar Royal"));
        assert_eq!(names.last().map(String::as_str), Some("Surveer Spartans"));
        assert!(service.teams("Z").is_none());
    }

    #[test]
    fn test_teams_sort_ignores_case() {
        let mut service = service();
        service.snapshot.teams.get_mut("A").unwrap()[0].name = "abhay Titans".to_string();

        let names: Vec<String> = service.teams("A").unwrap().into_iter().map(|t| t.name).collect();

        assert_eq!(names.first().map(String::as_str), Some("abhay Titans"));
        assert_eq!(names.get(1).map(String::as_str), Some("Akshar Royal"));
    }

    #[test]
    fn test_reset_restores_default_roster() {
        let mut service = service();
        service
            .record_match(&input(
                "B0",
                "B1",
                [SetEntry::scores(25, 20), SetEntry::scores(25, 18), SetEntry::default()],
            ))
            .unwrap();

        service.reset().unwrap();

        assert!(service.store.load().unwrap().is_none());
        assert!(service.all_standings().iter().all(|g| g.rows.iter().all(|r| r.points == 0)));
    }
}
