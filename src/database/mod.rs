pub mod connection;
pub mod kv_store;
pub mod setup;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use kv_store::StoredBlob;
