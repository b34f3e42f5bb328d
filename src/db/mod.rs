//! SQLite storage for work-log entries.
//!
//! This module provides the SQLite-backed implementation of
//! [`EntryRepository`]. Connections come from an r2d2 pool sized for a
//! single writer.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions and schema initialization
//! - `entries`: Entry CRUD and filter queries
//! - `lock`: Advisory lock that keeps a second process away from the file
//!
//! # Example
//!
//! ```no_run
//! use worklog::db::Database;
//! use std::path::Path;
//!
//! let db = Database::open(Path::new("/tmp/work_log.db"))?;
//! db.initialize_schema()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod entries;
pub mod lock;
pub mod schema;

use crate::constants::DB_POOL_SIZE;
use crate::errors::{AppResult, DatabaseError};
use crate::repository::{Entry, EntryFilter, EntryRepository, NewEntry};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use tracing::{debug, info};

pub use lock::DatabaseLock;

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Database handle with connection pooling.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates a SQLite database file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Database file cannot be opened or is not a SQLite database
    /// - Connection pool cannot be initialized
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);
        let db = Self::with_manager(SqliteConnectionManager::file(db_path))?;
        info!("Database opened successfully");
        Ok(db)
    }

    /// Opens a private in-memory database. Tests use it in place of a file.
    ///
    /// The pool keeps its single connection alive for the lifetime of the
    /// handle, so the data survives between calls.
    pub fn open_in_memory() -> AppResult<Self> {
        Self::with_manager(SqliteConnectionManager::memory())
    }

    fn with_manager(manager: SqliteConnectionManager) -> AppResult<Self> {
        let pool = Pool::builder()
            .max_size(DB_POOL_SIZE)
            .max_lifetime(None)
            .idle_timeout(None)
            .build(manager)
            .map_err(DatabaseError::Pool)?;

        // Fail early on files that are not SQLite databases
        let conn = pool.get().map_err(DatabaseError::Pool)?;
        conn.execute_batch("PRAGMA schema_version;")
            .map_err(DatabaseError::Sqlite)?;
        drop(conn);

        Ok(Database { pool })
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the pool is exhausted.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| DatabaseError::Pool(e).into())
    }

    /// Initializes the database schema.
    ///
    /// Creates all necessary tables and indexes if they don't exist.
    /// This is idempotent and safe to call multiple times.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        info!("Database schema initialized");
        Ok(())
    }
}

impl EntryRepository for Database {
    fn create(&mut self, entry: NewEntry) -> AppResult<Entry> {
        let conn = self.get_conn()?;
        entries::insert_entry(&conn, entry)
    }

    fn all(&self) -> AppResult<Vec<Entry>> {
        let conn = self.get_conn()?;
        entries::select_entries(&conn, None)
    }

    fn filter(&self, filter: &EntryFilter) -> AppResult<Vec<Entry>> {
        let conn = self.get_conn()?;
        entries::select_entries(&conn, Some(filter))
    }

    fn update(&mut self, entry: &Entry) -> AppResult<()> {
        let conn = self.get_conn()?;
        entries::update_entry(&conn, entry)
    }

    fn delete(&mut self, entry: &Entry) -> AppResult<()> {
        let conn = self.get_conn()?;
        entries::delete_entry(&conn, entry.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> NewEntry {
        NewEntry {
            name: "Redha Achour".to_string(),
            title: "Project 4".to_string(),
            date: NaiveDate::from_ymd_opt(2017, 12, 17).unwrap(),
            time: 45,
            notes: "work log using database".to_string(),
        }
    }

    #[test]
    fn test_database_open_and_connect() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let db = Database::open(&db_path).unwrap();
        let conn = db.get_conn().unwrap();

        let result: i32 = conn
            .query_row("SELECT 1 + 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(result, 2);
    }

    #[test]
    fn test_open_rejects_non_database_file() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("garbage.db");
        std::fs::write(&db_path, "not a sqlite file\n".repeat(64)).unwrap();

        assert!(Database::open(&db_path).is_err());
    }

    #[test]
    fn test_initialize_schema_idempotent() {
        let db = Database::open_in_memory().unwrap();

        db.initialize_schema().unwrap();
        db.initialize_schema().unwrap();
    }

    #[test]
    fn test_in_memory_data_survives_between_calls() {
        let mut db = Database::open_in_memory().unwrap();
        db.initialize_schema().unwrap();

        let created = db.create(sample()).unwrap();
        let all = db.all().unwrap();

        assert_eq!(all, vec![created]);
    }

    #[test]
    fn test_entries_persist_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("work_log.db");

        let created = {
            let mut db = Database::open(&db_path).unwrap();
            db.initialize_schema().unwrap();
            db.create(sample()).unwrap()
        };

        let db = Database::open(&db_path).unwrap();
        db.initialize_schema().unwrap();
        assert_eq!(db.all().unwrap(), vec![created]);
    }
}
