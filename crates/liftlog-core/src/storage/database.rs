//! SQLite-backed key-value storage.
//!
//! Each top-level collection (workout sets, sessions, profile, ...) is one
//! JSON document under a fixed key. Writers replace a whole document at a
//! time; there are no partial updates.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use super::{data_dir, Config};
use crate::error::{Result, StorageError};

/// SQLite database holding the key-value table.
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open the database file named in `config` inside the data directory.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open(config: &Config) -> Result<Self> {
        let path = data_dir()?.join(&config.storage.db_file);
        Self::open_at(path)
    }

    /// Open (or create) a database at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path).map_err(|source| StorageError::OpenFailed {
            path: path.clone(),
            source,
        })?;
        let db = Self {
            conn,
            path: Some(path),
        };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    ///
    /// # Errors
    /// Returns an error if SQLite cannot allocate the database.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn, path: None };
        db.migrate()?;
        Ok(db)
    }

    /// File backing this database, `None` when in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Set several values in a single transaction.
    ///
    /// Either every value is written or none is.
    pub fn kv_set_many(&self, entries: &[(&str, String)]) -> Result<(), StorageError> {
        self.conn.execute_batch("BEGIN IMMEDIATE TRANSACTION;")?;
        let result: Result<(), rusqlite::Error> = (|| {
            for (key, value) in entries {
                self.conn.execute(
                    "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                    params![key, value],
                )?;
            }
            Ok(())
        })();
        match result {
            Ok(()) => {
                self.conn.execute_batch("COMMIT;")?;
                Ok(())
            }
            Err(err) => {
                let _ = self.conn.execute_batch("ROLLBACK;");
                Err(err.into())
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Remove a key. Returns whether it existed.
    pub fn kv_delete(&self, key: &str) -> Result<bool, StorageError> {
        let removed = self.conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_store() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
        db.kv_set("test", "again").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "again");
    }

    #[test]
    fn kv_delete_reports_presence() {
        let db = Database::open_memory().unwrap();
        db.kv_set("theme", "\"light\"").unwrap();
        assert!(db.kv_delete("theme").unwrap());
        assert!(!db.kv_delete("theme").unwrap());
        assert!(db.kv_get("theme").unwrap().is_none());
    }

    #[test]
    fn kv_set_many_writes_all() {
        let db = Database::open_memory().unwrap();
        db.kv_set_many(&[("a", "1".into()), ("b", "2".into())]).unwrap();
        assert_eq!(db.kv_get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(db.kv_get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn kv_set_many_rolls_back_on_failure() {
        let db = Database::open_memory().unwrap();
        db.kv_set("a", "old").unwrap();
        db.connection()
            .execute_batch(
                "CREATE TRIGGER reject_b BEFORE INSERT ON kv WHEN NEW.key = 'b'
                 BEGIN SELECT RAISE(ABORT, 'disk full'); END;",
            )
            .unwrap();

        assert!(db.kv_set_many(&[("a", "new".into()), ("b", "2".into())]).is_err());
        assert_eq!(db.kv_get("a").unwrap().as_deref(), Some("old"));
        assert!(db.kv_get("b").unwrap().is_none());

        db.kv_set("c", "3").unwrap();
        assert_eq!(db.kv_get("c").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("liftlog.db");
        {
            let db = Database::open_at(&path).unwrap();
            assert_eq!(db.path(), Some(path.as_path()));
            db.kv_set("onboardingComplete", "true").unwrap();
        }
        let db = Database::open_at(&path).unwrap();
        assert_eq!(db.kv_get("onboardingComplete").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn open_at_missing_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = Database::open_at(dir.path().join("no/such/dir/liftlog.db"));
        assert!(result.is_err());
    }
}
