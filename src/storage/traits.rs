use crate::domain::FeedRecord;
use crate::errors::FeedStoreResult;

#[cfg_attr(test, mockall::automock)]
pub trait FeedRepository: Send + Sync {
    /// Insert a feed, replacing every field of an existing row with the same id
    fn upsert(&self, feed: &FeedRecord) -> FeedStoreResult<()>;
    /// All feeds in store read order
    fn load_all(&self) -> FeedStoreResult<Vec<FeedRecord>>;
    fn feed_ids(&self) -> FeedStoreResult<Vec<i64>>;
    /// Delete a feed together with the items that reference it
    fn delete_cascade(&self, id: i64) -> FeedStoreResult<()>;
}
