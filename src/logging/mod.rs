//! Diagnostic logging to disk.
//!
//! The terminal is owned by the UI, so when logging is enabled the tracing
//! subscriber writes to `<data_dir>/quickdo/quickdo.log` instead of stdout.
//! Disabled by default; no subscriber is installed in that case.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

fn log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quickdo")
        .join("quickdo.log")
}

pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = log_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let level: Level = config.level.parse().unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
