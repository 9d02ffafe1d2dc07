//! Logging initialization for SignupCLI.
//!
//! TUI mode: logs to `<config dir>/logs/signup-{datetime}.log`, since the
//! terminal UI owns stdout and stderr.
//! CLI mode: logs to stderr.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Settings, SignupPaths};

/// Result of logging initialization
pub struct LoggingHandle {
    /// Flushes buffered file logs when dropped; keep it alive until exit
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set in TUI mode with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

/// Name of the log file for a TUI session started at `now`
pub fn log_file_name(now: DateTime<Utc>) -> String {
    format!("signup-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

/// Initialize logging based on mode and settings.
///
/// `debug_override` forces the "debug" level (from `--debug`). `RUST_LOG`
/// takes precedence over both.
pub fn init_logging(
    settings: &Settings,
    paths: &SignupPaths,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let log_level = if debug_override {
        "debug".to_string()
    } else {
        settings.log_level.clone()
    };

    let filter =
        tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or(log_level));

    if is_tui_mode {
        if !settings.log_to_file {
            // Anything written to the terminal would tear the UI
            return Ok(LoggingHandle {
                _guard: None,
                log_file_path: None,
            });
        }

        let logs_dir = paths.logs_dir();
        std::fs::create_dir_all(&logs_dir)?;

        let log_filename = log_file_name(Utc::now());
        let log_file_path = logs_dir.join(&log_filename);

        let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .try_init()?;

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}
