// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod queries;

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::backend;
use crate::error::PersistenceError;
use crate::kv::KeyValueStore;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives its own shared-cache database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Key-value store backed by a single `SQLite` table.
pub struct SqliteStore {
    conn: SqliteConnection,
}

impl SqliteStore {
    /// Creates a store over a fresh in-memory `SQLite` database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_rooms_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a store over a `SQLite` database file, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn put(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        debug!(key, bytes = value.len(), "Writing snapshot");
        queries::upsert_snapshot(&mut self.conn, key, value)
    }

    fn get(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        queries::find_snapshot(&mut self.conn, key)
    }
}
