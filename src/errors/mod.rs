use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedStoreError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Storage errors
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] rusqlite::Error),

    #[error("Feed store is not open")]
    NotOpen,

    #[error("Write failed: {0}")]
    WriteFailed(#[source] rusqlite::Error),

    #[error("Read failed: {0}")]
    ReadFailed(#[source] rusqlite::Error),

    // Presentation errors
    #[error("Row {index} out of range (row count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    // Parsing errors
    #[error("Feed list parsing failed: {0}")]
    Parse(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FeedStoreResult<T> = Result<T, FeedStoreError>;
