use anyhow::{Context, Result};
use log::debug;

use super::SnapshotStore;
use crate::database::{self, kv_store, DbPool};
use crate::errors::storage_context;

/// Snapshot blob kept in the `kv_store` table of a SQLite database
pub struct SqliteStore {
    pool: DbPool,
    key: String,
}

impl SqliteStore {
    pub fn open(database_path: &str, key: &str) -> Result<Self> {
        let pool = database::create_pool(database_path)?;
        Self::from_pool(pool, key)
    }

    pub fn from_pool(pool: DbPool, key: &str) -> Result<Self> {
        let mut conn = database::get_connection(&pool)?;
        database::setup::ensure_schema(&mut conn)?;
        drop(conn);

        Ok(Self {
            pool,
            key: key.to_string(),
        })
    }
}

impl SnapshotStore for SqliteStore {
    fn load(&self) -> Result<Option<String>> {
        let mut conn = database::get_connection(&self.pool)?;
        let blob = kv_store::find_blob(&mut conn, &self.key)
            .with_context(|| storage_context("load", &self.key))?;

        if let Some(stored) = &blob {
            debug!("Loaded snapshot {} saved at {}", stored.key, stored.updated_at);
        }
        Ok(blob.map(|b| b.value))
    }

    fn save(&self, blob: &str) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let stored = kv_store::upsert_blob(&mut conn, &self.key, blob)
            .with_context(|| storage_context("save", &self.key))?;

        debug!("Saved snapshot {} at {}", stored.key, stored.updated_at);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        kv_store::delete_blob(&mut conn, &self.key)
            .with_context(|| storage_context("clear", &self.key))?;
        Ok(())
    }
}
