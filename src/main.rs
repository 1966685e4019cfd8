mod app;
mod cli;
mod clipboard;
mod color;
mod commands;
mod config;
mod event;
mod extract;
mod keys;
mod logging;
mod prefs;
mod runner;
mod select;
mod storage;
mod swatch;
mod template;
mod time;
mod tui;
mod views;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Command};
use storage::{KvStore, MemoryStore, SqliteStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(&config::log_path(), cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    let mut config = config::load(&config_path)?;
    if let Some(db) = &cli.db {
        config.db_path = Some(db.clone());
    }

    let store: Box<dyn KvStore> = if cli.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        let path = config.db_path();
        Box::new(
            SqliteStore::open(&path)
                .with_context(|| format!("Failed to open storage: {}", path.display()))?,
        )
    };

    tracing::info!(command = ?cli.command, "starting");
    match &cli.command {
        None => runner::run(store.as_ref(), &config, cli.image.clone()).await,
        Some(Command::Extract { image, json, copy }) => {
            commands::extract(store.as_ref(), &config, image, *json, *copy).await
        }
        Some(Command::Template { action }) => commands::template(store.as_ref(), action),
        Some(Command::Prefs { action }) => commands::prefs(store.as_ref(), action),
    }
}
