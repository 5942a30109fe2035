//! Tracing setup
//!
//! The interactive wizard owns the terminal, so it logs to a file through a
//! non-blocking writer. One-shot commands log to stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::Result;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Level from the CLI, plus any RUST_LOG directives on top
pub fn build_filter(level: LogLevel) -> EnvFilter {
    let mut filter = EnvFilter::new(level.to_filter_directive());
    if let Ok(extra) = std::env::var("RUST_LOG") {
        for directive in extra.split(',').filter(|d| !d.trim().is_empty()) {
            if let Ok(parsed) = directive.trim().parse() {
                filter = filter.add_directive(parsed);
            }
        }
    }
    filter
}

/// Standard text output on stderr
pub fn init_stderr(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Append to `log_file`. Keep the guard alive until exit so buffered lines
/// are flushed.
pub fn init_file(level: LogLevel, log_file: &Path) -> Result<WorkerGuard> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer)
        .try_init();

    tracing::info!(path = %log_file.display(), "File logging enabled");
    Ok(guard)
}
