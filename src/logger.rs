//! Logging setup on top of the `log` facade, written out by `fern`.

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME};

/// Default log file location under the platform data directory
pub fn default_log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}

/// File the logger writes to, if any
pub fn log_file_path(config: &LoggingConfig) -> Option<PathBuf> {
    if !config.enabled {
        return None;
    }
    config.file.clone().or_else(default_log_file_path)
}

/// Build the dispatcher without installing it.
///
/// With logging disabled only warnings and errors reach stderr.
pub fn build_dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let level = if config.enabled {
        config.level_filter()?
    } else {
        LevelFilter::Warn
    };

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sea_orm", LevelFilter::Warn)
        .chain(std::io::stderr());

    if let Some(path) = log_file_path(config) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    Ok(dispatch)
}

/// Install the global logger. Fails if one is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    build_dispatch(config)?
        .apply()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))
}
