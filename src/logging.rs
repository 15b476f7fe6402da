//! File-based logging bootstrap.
//!
//! The terminal is owned by the UI while the app runs, so log output goes to
//! rolling files instead of stderr. Initialization happens at most once per
//! process; later calls with the same directory are no-ops.

use crate::error::{CardSwipeError, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const LOG_FILE_BASENAME: &str = "cardswipe";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceLock<LoggingState> = OnceLock::new();

struct LoggingState {
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Default log directory (e.g. ~/.local/share/cardswipe/logs)
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("cardswipe").join("logs"))
}

/// Returns the default log level for the current build mode.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Normalizes a user-supplied level name, rejecting unknown levels.
pub fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(CardSwipeError::LoggingError(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        ))),
    }
}

/// Starts rolling file logging in `log_dir`.
///
/// Re-initialization with the same directory succeeds without touching the
/// running logger; a different directory is rejected.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<()> {
    let level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.log_dir == log_dir {
            return Ok(());
        }
        return Err(CardSwipeError::LoggingError(format!(
            "logging already initialized at `{}`",
            state.log_dir.display()
        )));
    }

    std::fs::create_dir_all(log_dir).map_err(|e| {
        CardSwipeError::LoggingError(format!(
            "failed to create log directory `{}`: {e}",
            log_dir.display()
        ))
    })?;

    let logger = Logger::try_with_str(level)
        .map_err(|e| CardSwipeError::LoggingError(format!("invalid log level `{level}`: {e}")))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|e| CardSwipeError::LoggingError(format!("failed to start logger: {e}")))?;

    let _ = LOGGING_STATE.set(LoggingState {
        log_dir: log_dir.to_path_buf(),
        _logger: logger,
    });

    log::info!(
        "event=app_start level={} version={} log_dir={}",
        level,
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level_accepts_known_levels() {
        assert_eq!(normalize_level("TRACE").unwrap(), "trace");
        assert_eq!(normalize_level(" debug ").unwrap(), "debug");
        assert_eq!(normalize_level("warning").unwrap(), "warn");
        assert_eq!(normalize_level("error").unwrap(), "error");
    }

    #[test]
    fn test_normalize_level_rejects_unknown() {
        let err = normalize_level("verbose").unwrap_err();
        assert!(err.to_string().contains("unsupported log level"));
    }

    #[test]
    fn test_default_log_level_is_valid() {
        assert!(normalize_level(default_log_level()).is_ok());
    }
}
