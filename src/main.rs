//! Contact Book - Main entry point
//!
//! Loads the contacts file and runs the interactive menu on stdin/stdout.

use anyhow::Result;
use contact_book::{Config, ConsoleInterface};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so the menu on stdout stays readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using contacts file {}", config.contacts_file.display());

    let mut ui = ConsoleInterface::new(io::stdin().lock(), io::stdout());
    if let Err(e) = contact_book::ui::run(&config.contacts_file, &mut ui) {
        error!("{}", e);
        return Err(e.into());
    }

    Ok(())
}
