//! Logging configuration using tracing
//!
//! The terminal is owned by the UI, so everything goes to a rolling log file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "ACCEPTME_LOG";

const DEFAULT_FILTER: &str = "acceptme=info,warn";
const LOG_FILE_NAME: &str = "acceptme.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/acceptme/logs/`
/// Log level is controlled by the `ACCEPTME_LOG` environment variable.
///
/// # Examples
/// ```bash
/// ACCEPTME_LOG=debug acceptme
/// ACCEPTME_LOG=acceptme_bridge=trace acceptme --offline
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("AcceptMe starting (v{})", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Build the filter from `ACCEPTME_LOG`, falling back to the default
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("acceptme").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    let day = chrono::Local::now().format("%Y-%m-%d");
    Ok(dir.join(format!("{LOG_FILE_NAME}.{day}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_filter_defaults_without_variable() {
        std::env::remove_var(LOG_ENV_VAR);
        assert_eq!(env_filter().to_string(), EnvFilter::new(DEFAULT_FILTER).to_string());
    }

    #[test]
    #[serial]
    fn test_env_filter_reads_variable() {
        std::env::set_var(LOG_ENV_VAR, "debug");
        let filter = env_filter().to_string();
        std::env::remove_var(LOG_ENV_VAR);
        assert_eq!(filter, "debug");
    }

    #[test]
    fn test_log_file_lives_in_acceptme_dir() {
        let path = get_current_log_file().unwrap();
        let rendered = path.to_string_lossy();
        assert!(rendered.contains("acceptme"));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("acceptme.log."));
    }
}
