use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::Level;

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global file subscriber. Returns `false` when no log file is configured.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let Some(path) = config.file.as_deref() else {
        return Ok(false);
    };
    let level = parse_level(&config.level);
    let file = open_log_file(path)?;

    let builder = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(level)
        .with_target(true)
        .with_writer(Mutex::new(file));

    let installed = match config.format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    };
    installed.map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;

    tracing::info!(path = %path.display(), %level, "logging started");
    Ok(true)
}

pub fn parse_level(raw: &str) -> Level {
    raw.trim().parse().unwrap_or(Level::INFO)
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))
}
