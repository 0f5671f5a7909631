use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{ApiError, Result};

/// Initializes logging with console output and a daily-rotated JSON file.
///
/// `RUST_LOG` takes precedence over the configured filter. Keep the returned guard alive
/// for as long as file output should be flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    fs::create_dir_all(&config.directory)?;

    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| ApiError::Config(format!("Failed to install tracing subscriber: {}", e)))?;

    Ok(guard)
}
