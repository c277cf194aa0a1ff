mod file_store;
mod sqlite_store;

pub use file_store::FileStore;
pub use sqlite_store::SqliteStore;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::{StorageBackend, StorageSettings, TournamentSettings};
use crate::domain::Snapshot;
use crate::errors::parse_context;

/// Key-value blob storage for the serialized tournament snapshot
pub trait SnapshotStore: Send {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, blob: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Open the store selected in the settings
pub fn open_store(settings: &StorageSettings) -> Result<Box<dyn SnapshotStore>> {
    let store: Box<dyn SnapshotStore> = match settings.backend {
        StorageBackend::Sqlite => Box::new(SqliteStore::open(&settings.database_path, settings.storage_key)?),
        StorageBackend::File => Box::new(FileStore::new(&settings.data_dir, settings.storage_key)?),
    };
    Ok(store)
}

pub fn save_snapshot(store: &dyn SnapshotStore, snapshot: &Snapshot) -> Result<()> {
    let blob = snapshot
        .to_json()
        .with_context(|| parse_context("tournament snapshot"))?;
    store.save(&blob)
}

/// Load the stored snapshot, falling back to the default roster.
///
/// A blob that fails structural validation is replaced by the default
/// snapshot, which is persisted right away.
pub fn load_or_default(store: &dyn SnapshotStore, settings: &TournamentSettings) -> Result<Snapshot> {
    let Some(blob) = store.load()? else {
        info!("No stored snapshot, starting from the default roster");
        return Ok(Snapshot::from_roster(&settings.roster));
    };

    match Snapshot::from_json(&blob, settings.group_ids()) {
        Ok(snapshot) => {
            info!("Loaded snapshot with {} groups", snapshot.teams.len());
            Ok(snapshot)
        }
        Err(e) => {
            warn!("Stored snapshot is invalid ({}), resetting to default", e);
            let snapshot = Snapshot::from_roster(&settings.roster);
            save_snapshot(store, &snapshot)?;
            Ok(snapshot)
        }
    }
}

/// Discard the stored snapshot and start over with zeroed statistics
pub fn reset(store: &dyn SnapshotStore, settings: &TournamentSettings) -> Result<Snapshot> {
    store.clear()?;
    info!("Tournament data reset to the default roster");
    Ok(Snapshot::from_roster(&settings.roster))
}
