mod connection;
mod feed_repository;

pub use connection::{SqliteStorage, IN_MEMORY};
pub use feed_repository::SqliteFeedRepository;
