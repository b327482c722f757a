use std::fs;
use std::io::{self, Read};

use clap::Parser;

use feedstore::cli::{Cli, Commands};
use feedstore::config::Config;
use feedstore::domain::{FeedList, FeedRole, FeedValue};
use feedstore::errors::FeedStoreResult;
use feedstore::services::FeedStore;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> FeedStoreResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?.with_db_path(cli.db);

    // Open the store (creates the feeds table and loads it)
    let store = FeedStore::open_path(&config.db_path)?;

    match cli.command {
        Commands::List => cmd_list(&store),
        Commands::Add {
            id,
            title,
            url,
            icon,
        } => cmd_add(store, id, &title, &url, &icon),
        Commands::Sync { path } => cmd_sync(store, path.as_deref()),
    }
}

fn cmd_list(store: &FeedStore) -> FeedStoreResult<()> {
    if store.record_count() == 0 {
        println!("No feeds stored.");
        return Ok(());
    }

    println!("Stored feeds:\n");
    for row in 0..store.record_count() {
        let id = store.data(row, FeedRole::Id)?;
        let title = store.data(row, FeedRole::Title)?;
        println!("  {}. {}", id, title);

        for role in [FeedRole::Url, FeedRole::Icon] {
            let value = store.data(row, role)?;
            if value != FeedValue::Text(String::new()) {
                println!("    {}: {}", role, value);
            }
        }
        println!();
    }

    Ok(())
}

fn cmd_add(
    mut store: FeedStore,
    id: i64,
    title: &str,
    url: &str,
    icon: &str,
) -> FeedStoreResult<()> {
    store.upsert(id, title, url, icon)?;
    println!("Stored feed {}: {}", id, title);
    Ok(())
}

fn cmd_sync(mut store: FeedStore, path: Option<&str>) -> FeedStoreResult<()> {
    let content = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let feeds = FeedList::from_json(&content)?.into_records();
    println!("Syncing {} feeds...", feeds.len());

    let report = store.reconcile(&feeds)?;

    println!(
        "Sync complete: {} upserted, {} removed, {} failed",
        report.upserted,
        report.deleted,
        report.failures()
    );

    Ok(())
}
