//! Log setup.  The terminal is the game surface, so logs go to a file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Send all `tracing` output to `log_dir/file_name`.
///
/// The level defaults to `info` and can be overridden with `RUST_LOG`.
/// The returned guard must be held until exit so buffered lines are flushed.
pub fn setup_logging(log_dir: &Path, file_name: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install the log subscriber")?;

    tracing::info!(dir = %log_dir.display(), file = file_name, "logging initialized");

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_setup_logging_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("nested").join("logs");

        // Only one subscriber can be installed per process
        let guard = setup_logging(&log_dir, "test.log").unwrap();
        assert!(log_dir.is_dir());

        assert!(setup_logging(&log_dir, "again.log").is_err());
        drop(guard);
    }
}
