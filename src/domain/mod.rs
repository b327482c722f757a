pub mod feed;
pub mod feed_list;

pub use feed::{FeedRecord, FeedRole, FeedValue};
pub use feed_list::{FeedList, RemoteFeed};
