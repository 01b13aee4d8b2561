// Logging goes to a daily rotating file - stdout belongs to the terminal UI

use crate::error::{Result, ShellError};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "tuneshell.log";

pub fn default_filter(dev: bool) -> &'static str {
    if dev {
        "info,tuneshell=debug"
    } else {
        "info"
    }
}

/// Installs the global subscriber. Keep the returned guard alive until exit so
/// buffered lines get flushed.
pub fn init_logging(log_dir: &Path, dev: bool) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir).map_err(|e| {
        ShellError::Logging(format!("cannot create {}: {}", log_dir.display(), e))
    })?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins over the built-in levels
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(dev)));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ShellError::Logging(e.to_string()))?;

    Ok(guard)
}
