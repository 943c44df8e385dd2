//! Contact Book - Main entry point
//!
//! Loads the address book, runs the interactive assistant on stdin/stdout
//! and saves the book when the session ends.

use anyhow::{Context, Result};
use contact_book::cli::{Assistant, ConsoleView, SystemClock};
use contact_book::{AddressBookRepository, Config, JsonFileRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the conversation on stdout
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book file {}", config.data_file.display());

    let repository = JsonFileRepository::new(&config.data_file);
    let book = repository
        .load()
        .inspect_err(|e| error!("Failed to load address book: {}", e))
        .with_context(|| format!("could not load {}", config.data_file.display()))?;

    let mut assistant = Assistant::new(book, ConsoleView::stdout(), SystemClock);
    let session = assistant.run(io::stdin().lock());

    // Save even if reading input failed midway
    repository
        .save(assistant.book())
        .with_context(|| format!("could not save {}", config.data_file.display()))?;
    info!("Address book saved");

    session.context("failed to read input")?;
    Ok(())
}
