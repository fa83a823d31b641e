//! ConText - Main entry point
//!
//! Runs the contact manager in the terminal, reading commands from stdin.

use anyhow::{Context, Result};
use context_contacts::services::{load_initial_contacts, LogicManager, ModelManager};
use context_contacts::storage::{ContactsStorage, JsonContactsStorage};
use context_contacts::ui::TerminalView;
use context_contacts::{app, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Log to stderr only; stdout carries command feedback
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let storage = JsonContactsStorage::new(&config.data_file);
    info!("Using data file {}", storage.path().display());

    let contacts = match load_initial_contacts(&storage, &config) {
        Ok(contacts) => contacts,
        Err(e) => {
            error!("Failed to load contacts: {}", e);
            return Err(e.into());
        }
    };

    let mut logic = LogicManager::new(ModelManager::new(contacts), Box::new(storage));
    let mut view = TerminalView::new(io::stdout().lock());

    app::run(&mut logic, io::stdin().lock(), &mut view).context("Terminal I/O failed")?;

    info!("ConText shutdown complete");
    Ok(())
}
