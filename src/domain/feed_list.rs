use serde::Deserialize;

use super::FeedRecord;
use crate::errors::FeedStoreResult;

/// A feed as it appears in the remote feed list.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFeed {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "faviconLink")]
    pub favicon_link: Option<String>,
}

impl From<RemoteFeed> for FeedRecord {
    fn from(remote: RemoteFeed) -> Self {
        FeedRecord {
            id: remote.id,
            title: remote.title.unwrap_or_default(),
            url: remote.url.unwrap_or_default(),
            icon: remote.favicon_link.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedList {
    pub feeds: Vec<RemoteFeed>,
}

impl FeedList {
    pub fn from_json(json: &str) -> FeedStoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Records in list order, ready for reconciliation
    pub fn into_records(self) -> Vec<FeedRecord> {
        self.feeds.into_iter().map(FeedRecord::from).collect()
    }
}
