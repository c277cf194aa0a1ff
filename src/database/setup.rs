use anyhow::{Context, Result};

use super::connection::DbConn;

/// Create the `kv_store` table if missing; existing rows are kept
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    conn.execute_batch(include_str!("schema.sql"))
        .context("Failed to create kv_store table")?;

    log::debug!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, get_connection, kv_store};

    #[test]
    fn test_ensure_schema_keeps_existing_rows() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();

        ensure_schema(&mut conn).unwrap();
        kv_store::upsert_blob(&mut conn, "setup_test", "{}").unwrap();
        ensure_schema(&mut conn).unwrap();

        let blob = kv_store::find_blob(&mut conn, "setup_test").unwrap();
        assert_eq!(blob.map(|b| b.value).as_deref(), Some("{}"));
    }
}
