use rusqlite::Connection;

use crate::domain::FeedRecord;
use crate::errors::{FeedStoreError, FeedStoreResult};
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::FeedRepository;

pub struct SqliteFeedRepository {
    storage: SqliteStorage,
}

impl SqliteFeedRepository {
    pub fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }

    /// The items table belongs to the article store and may not exist yet
    fn has_items_table(conn: &Connection) -> rusqlite::Result<bool> {
        conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'items')",
            [],
            |row| row.get(0),
        )
    }
}

impl FeedRepository for SqliteFeedRepository {
    fn upsert(&self, feed: &FeedRecord) -> FeedStoreResult<()> {
        let conn = self.storage.connection()?;
        conn.execute(
            "INSERT OR REPLACE INTO feeds (id, title, url, icon) VALUES (?1, ?2, ?3, ?4)",
            (feed.id, &feed.title, &feed.url, &feed.icon),
        )
        .map_err(FeedStoreError::WriteFailed)?;

        tracing::debug!(feed_id = feed.id, "Feed inserted");
        Ok(())
    }

    fn load_all(&self) -> FeedStoreResult<Vec<FeedRecord>> {
        let conn = self.storage.connection()?;
        let mut stmt = conn
            .prepare("SELECT id, title, url, icon FROM feeds")
            .map_err(FeedStoreError::ReadFailed)?;

        let feeds = stmt
            .query_map([], |row| {
                Ok(FeedRecord {
                    id: row.get(0)?,
                    title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    url: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    icon: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                })
            })
            .map_err(FeedStoreError::ReadFailed)?;

        feeds
            .collect::<Result<Vec<_>, _>>()
            .map_err(FeedStoreError::ReadFailed)
    }

    fn feed_ids(&self) -> FeedStoreResult<Vec<i64>> {
        let conn = self.storage.connection()?;
        let mut stmt = conn
            .prepare("SELECT id FROM feeds")
            .map_err(FeedStoreError::ReadFailed)?;

        let ids = stmt
            .query_map([], |row| row.get(0))
            .map_err(FeedStoreError::ReadFailed)?;

        ids.collect::<Result<Vec<_>, _>>()
            .map_err(FeedStoreError::ReadFailed)
    }

    fn delete_cascade(&self, id: i64) -> FeedStoreResult<()> {
        let mut conn = self.storage.connection()?;
        let tx = conn.transaction().map_err(FeedStoreError::WriteFailed)?;

        if Self::has_items_table(&tx).map_err(FeedStoreError::ReadFailed)? {
            tx.execute("DELETE FROM items WHERE feedid = ?1", [id])
                .map_err(FeedStoreError::WriteFailed)?;
        }
        tx.execute("DELETE FROM feeds WHERE id = ?1", [id])
            .map_err(FeedStoreError::WriteFailed)?;

        tx.commit().map_err(FeedStoreError::WriteFailed)
    }
}
