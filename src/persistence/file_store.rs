use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::SnapshotStore;
use crate::errors::storage_context;

/// Snapshot blob kept as `<dir>/<key>.json`
pub struct FileStore {
    file_path: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(data_dir: P, key: &str) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        Ok(Self {
            file_path: data_dir.join(format!("{}.json", key)),
            key: key.to_string(),
        })
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.file_path)
            .with_context(|| storage_context("load", &self.key))?;
        Ok(Some(json))
    }

    fn save(&self, blob: &str) -> Result<()> {
        // Write beside the target and rename so a crash never leaves half a file
        let temp_path = self.file_path.with_extension("json.tmp");
        fs::write(&temp_path, blob).with_context(|| storage_context("save", &self.key))?;
        fs::rename(&temp_path, &self.file_path)
            .with_context(|| storage_context("save", &self.key))?;

        info!("Saved snapshot to {}", self.file_path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path).with_context(|| storage_context("clear", &self.key))?;
            info!("Removed snapshot file {}", self.file_path.display());
        }
        Ok(())
    }
}
