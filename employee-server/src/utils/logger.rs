//! Logging Infrastructure
//!
//! Structured logging setup. `RUST_LOG` wins over the configured level;
//! a daily-rolling file replaces stdout when a log directory exists.

use std::path::Path;
use tracing_subscriber::EnvFilter;

fn env_filter(log_level: Option<&str>) -> EnvFilter {
    let level = log_level.unwrap_or("info");
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},surrealdb=warn")))
}

/// Initialize the logger
///
/// `json` switches to one JSON object per line (production). Safe to call
/// more than once; later calls are ignored.
pub fn init_logger(log_level: Option<&str>, log_dir: Option<&str>, json: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    let file_appender = log_dir
        .map(Path::new)
        .filter(|p| p.exists())
        .map(|p| tracing_appender::rolling::daily(p, "employee-server"));

    let _ = match (json, file_appender) {
        (true, Some(file)) => subscriber
            .json()
            .with_writer(file)
            .with_ansi(false)
            .try_init(),
        (true, None) => subscriber.json().try_init(),
        (false, Some(file)) => subscriber.with_writer(file).with_ansi(false).try_init(),
        (false, None) => subscriber.try_init(),
    };
}
