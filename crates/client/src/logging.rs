//! Tracing setup for the terminal client.
//!
//! Narration goes to stdout through the console; tracing goes to stderr and,
//! when enabled, to a daily-rolling file.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

const LOG_FILE_PREFIX: &str = "mountain-king.log";

/// Installs the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole program.
pub fn setup_logging(config: &ClientConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = if config.log_file {
        let dir = prepare_log_dir(&base_dir())?;
        let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(seed = config.seed, "logging initialized");
    Ok(guard)
}

/// Platform cache directory for the client.
///
/// - macOS: `~/Library/Caches/mountain-king`
/// - Linux: `~/.cache/mountain-king` (or `$XDG_CACHE_HOME/mountain-king`)
/// - Windows: `%LOCALAPPDATA%\mountain-king`
/// - Fallback: `/tmp/mountain-king`
pub fn base_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "mountain-king")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/mountain-king"))
}

/// Creates `<base>/logs` if needed and returns it.
pub fn prepare_log_dir(base: &Path) -> Result<PathBuf> {
    let dir = base.join("logs");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_is_created_under_the_base() {
        let base = tempfile::tempdir().unwrap();
        let dir = prepare_log_dir(base.path()).unwrap();

        assert!(dir.is_dir());
        assert_eq!(dir, base.path().join("logs"));
        // idempotent
        assert_eq!(prepare_log_dir(base.path()).unwrap(), dir);
    }
}
