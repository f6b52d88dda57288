use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

use super::{BlobStore, StorageError};

pub const IN_MEMORY: &str = ":memory:";

/// Blob store backed by a single sqlite table keyed by blob name.
#[derive(Debug)]
pub struct SqliteBlobStore {
    conn: Connection,
}

impl SqliteBlobStore {
    /// Opens (or creates) the database file. `:memory:` gives a private
    /// in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema cannot be created.
    pub fn open(db_name: &str) -> Result<Self, StorageError> {
        let conn = if db_name == IN_MEMORY {
            Connection::open_in_memory()?
        } else {
            Connection::open(Path::new(db_name))?
        };
        conn.execute_batch(include_str!("../sql/schema/sqlite/00_blob_store.sql"))?;
        Ok(Self { conn })
    }
}

impl BlobStore for SqliteBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM blob_store WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO blob_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, ins_ts = CURRENT_TIMESTAMP;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM blob_store WHERE key = ?1;", params![key])?;
        Ok(())
    }
}
