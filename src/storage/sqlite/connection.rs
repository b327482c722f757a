use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::errors::{FeedStoreError, FeedStoreResult};

/// Path that selects a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS feeds (id INTEGER UNIQUE PRIMARY KEY, title VARCHAR(1024), url VARCHAR(2048), icon VARCHAR(2048))";

#[derive(Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> FeedStoreResult<Self> {
        let conn = Connection::open(path).map_err(FeedStoreError::StorageUnavailable)?;
        Self::init(conn)
    }

    pub fn in_memory() -> FeedStoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(FeedStoreError::StorageUnavailable)?;
        Self::init(conn)
    }

    /// Open a database file, or an in-memory database for `":memory:"`
    pub fn open(path_or_dsn: &str) -> FeedStoreResult<Self> {
        if path_or_dsn == IN_MEMORY {
            Self::in_memory()
        } else {
            Self::new(path_or_dsn)
        }
    }

    fn init(conn: Connection) -> FeedStoreResult<Self> {
        conn.execute_batch(SCHEMA)
            .map_err(FeedStoreError::StorageUnavailable)?;
        tracing::debug!("Feed table ready");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn connection(&self) -> FeedStoreResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| FeedStoreError::StorageUnavailable(rusqlite::Error::InvalidQuery))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn column_types(storage: &SqliteStorage) -> Vec<(String, String)> {
        let conn = storage.connection().unwrap();
        let mut stmt = conn.prepare("PRAGMA table_info(feeds)").unwrap();
        let columns = stmt
            .query_map([], |row| Ok((row.get(1)?, row.get(2)?)))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        columns
    }

    #[test]
    fn test_create_in_memory_storage() {
        let storage = SqliteStorage::open(IN_MEMORY).unwrap();

        assert_eq!(
            column_types(&storage),
            vec![
                ("id".to_string(), "INTEGER".to_string()),
                ("title".to_string(), "VARCHAR(1024)".to_string()),
                ("url".to_string(), "VARCHAR(2048)".to_string()),
                ("icon".to_string(), "VARCHAR(2048)".to_string()),
            ]
        );
    }

    #[test]
    fn test_reopen_existing_file_keeps_rows() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("feeds.db");

        {
            let storage = SqliteStorage::new(&db_path).unwrap();
            let conn = storage.connection().unwrap();
            conn.execute(
                "INSERT INTO feeds (id, title, url, icon) VALUES (1, 'Tech', 'http://a', '')",
                [],
            )
            .unwrap();
        }

        let storage = SqliteStorage::new(&db_path).unwrap();
        let conn = storage.connection().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM feeds", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_unopenable_path_is_storage_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("missing").join("feeds.db");

        let result = SqliteStorage::new(&db_path);
        assert!(matches!(result, Err(FeedStoreError::StorageUnavailable(_))));
    }
}
