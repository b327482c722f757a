pub mod traits;
pub mod sqlite;

pub use traits::FeedRepository;
pub use sqlite::{SqliteFeedRepository, SqliteStorage};
