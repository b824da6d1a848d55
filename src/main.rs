//! Contact Assistant - Main entry point
//!
//! Runs the interactive contact manager on the terminal. Replies go to
//! stdout; logs go to stderr.

use anyhow::Result;
use contact_assistant::assistant::repl;
use contact_assistant::{Assistant, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Configuration comes first because it carries the fallback log level
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for assistant replies)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully (locale: {})", config.locale);

    repl::run(Assistant::new(config.locale))?;

    info!("Contact assistant shutdown complete");
    Ok(())
}
