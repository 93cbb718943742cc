//! File logging. The terminal is owned by the UI, so events go to a rolling
//! file instead of stdout.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::error::{CounterError, CounterResult};

pub const LOG_FILE_PREFIX: &str = "counter-tui.log";

pub fn build_filter(level: &str) -> CounterResult<EnvFilter> {
    Ok(EnvFilter::try_new(level)?)
}

/// Installs the global subscriber when a log directory is configured.
/// The returned guard must live as long as the program so buffered lines
/// are flushed.
pub fn init(config: &Config) -> CounterResult<Option<WorkerGuard>> {
    let Some(dir) = config.log_dir.as_deref() else { return Ok(None) };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => build_filter(&config.log_level)?,
    };
    init_with(dir, filter).map(Some)
}

fn init_with(dir: &Path, filter: EnvFilter) -> CounterResult<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| CounterError::Logging(e.to_string()))?;

    Ok(guard)
}
