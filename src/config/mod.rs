use crate::errors::{FeedStoreError, FeedStoreResult};

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> FeedStoreResult<Self> {
        let exe_dir = Self::exe_dir();

        // .env next to the executable wins over one in the working directory
        if let Some(ref dir) = exe_dir {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        dotenvy::dotenv().ok();

        let db_path = match std::env::var("FEEDSTORE_DB_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(FeedStoreError::Config(
                    "FEEDSTORE_DB_PATH is set but empty".to_string(),
                ));
            }
            Ok(path) => path,
            Err(_) => exe_dir
                .map(|d| d.join("feeds.db").to_string_lossy().into_owned())
                .unwrap_or_else(|| "./feeds.db".to_string()),
        };

        Ok(Self { db_path })
    }

    /// Replace the database path when one was given explicitly
    pub fn with_db_path(mut self, db_path: Option<String>) -> Self {
        if let Some(path) = db_path {
            self.db_path = path;
        }
        self
    }
}
