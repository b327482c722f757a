pub mod feed_store;
pub mod observer;

pub use feed_store::{FeedStore, ReconcileReport};
pub use observer::ModelObserver;
