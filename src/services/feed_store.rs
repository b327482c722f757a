use std::collections::{HashMap, HashSet};

use crate::domain::{FeedRecord, FeedRole, FeedValue};
use crate::errors::{FeedStoreError, FeedStoreResult};
use crate::services::ModelObserver;
use crate::storage::sqlite::{SqliteFeedRepository, SqliteStorage};
use crate::storage::traits::FeedRepository;

/// Outcome of a [`FeedStore::reconcile`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub upserted: usize,
    pub upsert_failures: usize,
    pub deleted: usize,
    pub delete_failures: usize,
}

impl ReconcileReport {
    pub fn failures(&self) -> usize {
        self.upsert_failures + self.delete_failures
    }
}

/// Roles a view can bind to, with the names it binds them by
pub const ROLE_NAMES: &[(FeedRole, &str)] = &[
    (FeedRole::Id, "feedid"),
    (FeedRole::Title, "feedtitle"),
    (FeedRole::Url, "feedurl"),
    (FeedRole::Icon, "feedicon"),
];

/// Durable feed table plus the in-memory rows a view reads from.
///
/// The store starts closed. Once a repository is attached the cache holds
/// the table's rows in store read order; upserts update known ids in place
/// and append unknown ones until the next full load.
pub struct FeedStore<R = SqliteFeedRepository> {
    repository: Option<R>,
    feeds: Vec<FeedRecord>,
    rows: HashMap<i64, usize>,
    observers: Vec<Box<dyn ModelObserver>>,
}

impl FeedStore<SqliteFeedRepository> {
    pub fn new() -> Self {
        Self::closed()
    }

    /// Open or create the feed database at `path_or_dsn` and load its rows.
    ///
    /// `":memory:"` opens a private in-memory database. If the database can't
    /// be opened the store keeps its previous state.
    pub fn open(&mut self, path_or_dsn: &str) -> FeedStoreResult<()> {
        let storage = SqliteStorage::open(path_or_dsn)?;
        tracing::debug!(path = path_or_dsn, "Feed database opened");
        self.attach(SqliteFeedRepository::new(storage))
    }

    pub fn open_path(path_or_dsn: &str) -> FeedStoreResult<Self> {
        let mut store = Self::new();
        store.open(path_or_dsn)?;
        Ok(store)
    }
}

impl Default for FeedStore<SqliteFeedRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FeedRepository> FeedStore<R> {
    pub fn closed() -> Self {
        Self {
            repository: None,
            feeds: Vec::new(),
            rows: HashMap::new(),
            observers: Vec::new(),
        }
    }

    /// Use `repository` as the durable table and load its rows
    pub fn attach(&mut self, repository: R) -> FeedStoreResult<()> {
        self.repository = Some(repository);
        self.load_all()
    }

    pub fn is_open(&self) -> bool {
        self.repository.is_some()
    }

    pub fn subscribe(&mut self, observer: Box<dyn ModelObserver>) {
        self.observers.push(observer);
    }

    pub fn upsert(
        &mut self,
        id: i64,
        title: &str,
        url: &str,
        icon: &str,
    ) -> FeedStoreResult<()> {
        self.upsert_record(&FeedRecord::new(id, title, url, icon))
    }

    /// Insert or fully replace a feed; the cache is only touched on success
    pub fn upsert_record(&mut self, feed: &FeedRecord) -> FeedStoreResult<()> {
        self.repository()?.upsert(feed)?;
        self.cache_insert(feed.clone());
        Ok(())
    }

    /// Replace the cache with every row of the durable table.
    ///
    /// A failed read leaves the current rows in place.
    pub fn load_all(&mut self) -> FeedStoreResult<()> {
        let feeds = self.repository()?.load_all()?;
        tracing::debug!(count = feeds.len(), "Loaded feed data");

        self.notify_about_to_reset();
        self.replace_cache(feeds);
        self.notify_reset();
        Ok(())
    }

    /// Make the durable table and the cache hold exactly `feeds`.
    ///
    /// Every feed is upserted, then rows whose id is not in `feeds` are deleted
    /// together with their items and the cache is reloaded. Individual upsert
    /// and delete failures are logged and counted in the report. An empty
    /// `feeds` removes every stored feed.
    pub fn reconcile(&mut self, feeds: &[FeedRecord]) -> FeedStoreResult<ReconcileReport> {
        if !self.is_open() {
            return Err(FeedStoreError::NotOpen);
        }

        self.notify_about_to_reset();
        self.clear_cache();
        let result = self.reconcile_rows(feeds);
        self.notify_reset();

        result
    }

    fn reconcile_rows(&mut self, feeds: &[FeedRecord]) -> FeedStoreResult<ReconcileReport> {
        let mut report = ReconcileReport::default();
        let mut presented = HashSet::with_capacity(feeds.len());

        for feed in feeds {
            presented.insert(feed.id);
            match self.upsert_record(feed) {
                Ok(()) => report.upserted += 1,
                Err(e) => {
                    tracing::warn!(feed_id = feed.id, error = %e, "Failed to store feed");
                    report.upsert_failures += 1;
                }
            }
        }

        let repository = self.repository()?;

        // A failed id scan skips the deletes, the cache is still reloaded
        let scanned = match repository.feed_ids() {
            Ok(ids) => {
                for id in ids.into_iter().filter(|id| !presented.contains(id)) {
                    match repository.delete_cascade(id) {
                        Ok(()) => report.deleted += 1,
                        Err(e) => {
                            tracing::warn!(feed_id = id, error = %e, "Failed to delete feed");
                            report.delete_failures += 1;
                        }
                    }
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored feed ids");
                Err(e)
            }
        };

        let reloaded = repository.load_all()?;
        self.replace_cache(reloaded);
        scanned?;

        tracing::info!(
            upserted = report.upserted,
            deleted = report.deleted,
            failures = report.failures(),
            "Feeds reconciled"
        );
        Ok(report)
    }

    pub fn record_count(&self) -> usize {
        self.feeds.len()
    }

    pub fn record_at(&self, row: usize) -> FeedStoreResult<&FeedRecord> {
        self.feeds.get(row).ok_or(FeedStoreError::IndexOutOfRange {
            index: row,
            count: self.feeds.len(),
        })
    }

    pub fn data(&self, row: usize, role: FeedRole) -> FeedStoreResult<FeedValue> {
        Ok(self.record_at(row)?.value(role))
    }

    pub fn role_names() -> &'static [(FeedRole, &'static str)] {
        ROLE_NAMES
    }

    pub fn records(&self) -> &[FeedRecord] {
        &self.feeds
    }

    pub fn feed_ids(&self) -> Vec<i64> {
        self.feeds.iter().map(|f| f.id).collect()
    }

    fn repository(&self) -> FeedStoreResult<&R> {
        self.repository.as_ref().ok_or(FeedStoreError::NotOpen)
    }

    fn cache_insert(&mut self, feed: FeedRecord) {
        match self.rows.get(&feed.id) {
            Some(&row) => self.feeds[row] = feed,
            None => {
                self.rows.insert(feed.id, self.feeds.len());
                self.feeds.push(feed);
            }
        }
    }

    fn clear_cache(&mut self) {
        self.feeds.clear();
        self.rows.clear();
    }

    fn replace_cache(&mut self, feeds: Vec<FeedRecord>) {
        self.clear_cache();
        for feed in feeds {
            self.cache_insert(feed);
        }
    }

    fn notify_about_to_reset(&self) {
        for observer in &self.observers {
            observer.model_about_to_reset();
        }
    }

    fn notify_reset(&self) {
        for observer in &self.observers {
            observer.model_reset(self.feeds.len());
        }
    }
}
