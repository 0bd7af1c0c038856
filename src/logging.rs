//! File-backed tracing setup. The terminal belongs to the TUI, so nothing is
//! ever logged to stdout or stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Environment variable that overrides the configured filter
pub const LOG_ENV: &str = "KANBAN_LOG";

pub const LOG_FILE: &str = "kanban.log";

/// Build the filter from `KANBAN_LOG`, falling back to the configured level.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `<dir>/kanban.log`.
///
/// Returns `None` when the directory cannot be created; the app then runs
/// without logs. The returned guard flushes pending lines on drop and must
/// be kept alive for as long as logging is wanted.
pub fn init(dir: &Path, config: &LogConfig) -> Option<WorkerGuard> {
    std::fs::create_dir_all(dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_ansi(false)
        .with_writer(writer);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.ok().map(|_| guard)
}
