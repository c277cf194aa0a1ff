use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;

#[derive(Debug, Clone)]
pub struct StoredBlob {
    pub key: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

pub fn upsert_blob(conn: &mut DbConn, key: &str, value: &str) -> Result<StoredBlob> {
    let sql = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at RETURNING key, value, updated_at";

    let updated_at = Utc::now().naive_utc();
    conn.query_row(sql, params![key, value, updated_at], parse_blob_row)
        .context("Failed to store blob")
}

pub fn find_blob(conn: &mut DbConn, key: &str) -> Result<Option<StoredBlob>> {
    let sql = "SELECT key, value, updated_at FROM kv_store WHERE key = ?1";

    conn.query_row(sql, params![key], parse_blob_row)
        .optional()
        .context("Failed to query blob by key")
}

pub fn delete_blob(conn: &mut DbConn, key: &str) -> Result<bool> {
    let sql = "DELETE FROM kv_store WHERE key = ?1";

    let removed = conn
        .execute(sql, params![key])
        .context("Failed to delete blob")?;
    Ok(removed > 0)
}

fn parse_blob_row(row: &rusqlite::Row) -> rusqlite::Result<StoredBlob> {
    Ok(StoredBlob {
        key: row.get(0)?,
        value: row.get(1)?,
        updated_at: row.get(2)?,
    })
}
