use clap::ValueEnum;

use super::roster::{default_roster, GroupRoster};

pub const STORAGE_KEY: &str = "volleyballTournamentData_v2";

/// Where the snapshot blob lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    Sqlite,
    File,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub database_path: String,
    pub data_dir: String,
    pub storage_key: &'static str,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "volleyball_standings.db".to_string()),
            data_dir: std::env::var("STANDINGS_DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            storage_key: STORAGE_KEY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TournamentSettings {
    pub roster: Vec<GroupRoster>,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            roster: default_roster(),
        }
    }
}

impl TournamentSettings {
    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.roster.iter().map(|g| g.id)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageSettings,
    pub tournament: TournamentSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            storage: StorageSettings::default(),
            tournament: TournamentSettings::default(),
        }
    }

    pub fn with_backend(mut self, backend: StorageBackend) -> Self {
        self.storage.backend = backend;
        self
    }
}
