//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;
use crate::paths;

/// Environment variable holding the tracing filter directive
pub const LOG_ENV: &str = "VS_LOG";

const LOG_FILE_NAME: &str = "vs.log";
const DEFAULT_FILTER: &str = "vs=info,vs_alias=info,vs_app=info,vs_core=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written under [`paths::log_dir`], never to the terminal:
/// stdout and stderr carry the command's own output.
/// Log level is controlled by the `VS_LOG` environment variable.
///
/// # Examples
/// ```bash
/// VS_LOG=debug vs list
/// VS_LOG=trace vs myproject
/// ```
pub fn init() -> Result<()> {
    let log_dir = paths::log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
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
        .try_init()
        .map_err(|e| crate::error::Error::config(format!("Failed to install logger: {}", e)))?;

    tracing::debug!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Log file path; the daily appender adds a date suffix to it
pub fn log_file_path() -> PathBuf {
    paths::log_dir().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_log_file_path_name() {
        let file = log_file_path();
        assert_eq!(file.file_name().unwrap(), LOG_FILE_NAME);
        assert!(file.starts_with(paths::log_dir()));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
