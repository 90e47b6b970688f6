use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::DomainError;

/// Initialize the logging system with console output and file rotation.
///
/// Returns a guard that must be kept alive for the duration of the
/// application; dropping it flushes any remaining logs.
pub fn init_logging(logs_dir: &Path) -> Result<Option<WorkerGuard>, DomainError> {
    fs::create_dir_all(logs_dir)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bouncepull=info,warn"));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .without_time()
        .with_filter(env_filter);

    let file_appender = RollingFileAppender::new(Rotation::DAILY, logs_dir, "bouncepull.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(EnvFilter::new("bouncepull=debug"));

    // try_init so a second call (e.g. from tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();

    tracing::debug!(logs_dir = ?logs_dir, "Logging initialized");
    Ok(Some(guard))
}
