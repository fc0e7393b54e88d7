//! Tracing subscriber setup.

use crate::config::GameConfig;
use anyhow::{Context, Result};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to the configured log file.
///
/// The terminal belongs to the game, so nothing is written to stdout or
/// stderr. `RUST_LOG` takes precedence over the configured filter.
pub fn init_logging(config: &GameConfig) -> Result<()> {
    let log_file = File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
