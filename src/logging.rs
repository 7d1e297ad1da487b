//! File-backed `tracing` setup
//!
//! The terminal is in the alternate screen while the app runs, so logs can
//! only go to a file. Without `--log-file` no subscriber is installed and
//! every `tracing` macro is a no-op.

use crate::config::{Config, ConfigError};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Parse a filter directive such as `info` or `sortviz=debug`
pub fn parse_filter(directive: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(directive).map_err(|e| ConfigError::InvalidLogFilter {
        directive: directive.to_string(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber if a log file is configured.
///
/// The returned guard flushes the non-blocking writer when dropped and
/// must be kept alive until shutdown. Fails if the file cannot be opened
/// or another global subscriber is already installed.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = parse_filter(&config.log_level)?;

    let Some(path) = config.log_file.as_deref() else {
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sortviz.log".to_string());

    let log_file_error = |reason: String| ConfigError::LogFile {
        path: path.to_path_buf(),
        reason,
    };

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(|e| log_file_error(e.to_string()))?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| log_file_error(e.to_string()))?;

    Ok(Some(guard))
}
