//! Structured Logger
//!
//! Wraps `tracing` to provide console output, a daily-rolling NDJSON file,
//! and environment-based level control.

use std::path::Path;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "docscan.log";

/// Daily appender writing `<log_dir>/docscan.log.YYYY-MM-DD`.
pub fn file_appender<P: AsRef<Path>>(log_dir: P) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)
}

/// Initialize the global structured logger.
///
/// `RUST_LOG` wins over `level` when set. Calling this twice is harmless.
/// When `log_dir` cannot be created, only console output is installed.
pub fn init_logger<P: AsRef<Path>>(log_dir: P, level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, file_error) = match file_appender(&log_dir) {
        Ok(appender) => (
            Some(fmt::layer().json().with_writer(appender).with_ansi(false)),
            None,
        ),
        Err(e) => (None, Some(e)),
    };

    // stderr keeps stdout clean for CLI JSON output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if let Some(e) = file_error {
        tracing::warn!(
            log_dir = %log_dir.as_ref().display(),
            error = %e,
            "File logging disabled"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_dir_is_an_error() {
        assert!(file_appender("/proc/docscan_logs").is_err());
    }

    #[test]
    fn test_unwritable_dir_falls_back_to_console() {
        let result = std::panic::catch_unwind(|| init_logger("/proc/docscan_logs", "info"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_appender_creates_dir() {
        let dir = std::env::temp_dir().join(format!("docscan-logs-{}", std::process::id()));
        assert!(file_appender(&dir).is_ok());
        assert!(dir.is_dir());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
