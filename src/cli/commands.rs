use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feedstore")]
#[command(about = "Feed subscription store kept in sync with a remote feed list")]
#[command(version)]
pub struct Cli {
    /// Database file (":memory:" for a throwaway store)
    #[arg(long, global = true)]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stored feeds
    List,

    /// Add or replace a single feed
    Add {
        /// Feed id (replaces an existing feed with the same id)
        #[arg(long)]
        id: i64,

        /// Feed title
        #[arg(long)]
        title: String,

        /// Feed URL
        #[arg(long)]
        url: String,

        /// Favicon URL
        #[arg(long, default_value = "")]
        icon: String,
    },

    /// Reconcile stored feeds against a JSON feed list
    Sync {
        /// Path to the feed list (reads stdin if not specified)
        path: Option<String>,
    },
}
