//! Logging setup on top of the `log` facade.
//!
//! Records are formatted with a millisecond timestamp and routed by `fern`:
//! warnings and errors always reach stderr, and when logging is enabled every
//! record at or above the configured level is appended to the log file.

use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::{Config, LoggingConfig};

/// Default log file location inside the application data directory
pub fn get_log_file_path() -> PathBuf {
    Config::get_data_dir().join("todolists.log")
}

/// Build the dispatcher described by `config` without installing it.
pub fn build_dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let stderr = fern::Dispatch::new().level(LevelFilter::Warn).chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {} {}: {}",
                Utc::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sea_orm", LevelFilter::Warn)
        .chain(stderr);

    if config.enabled {
        let path = config.file.clone().unwrap_or_else(get_log_file_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.level(config.level_filter()?).chain(file);
    } else {
        dispatch = dispatch.level(LevelFilter::Warn);
    }

    Ok(dispatch)
}

/// Install the global logger. Can only succeed once per process.
pub fn init(config: &LoggingConfig) -> Result<()> {
    build_dispatch(config)?
        .apply()
        .context("Failed to install logger")
}
