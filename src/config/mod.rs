pub mod roster;
pub mod settings;

pub use roster::{default_roster, GroupRoster};
pub use settings::{AppConfig, StorageBackend, StorageSettings, TournamentSettings};
