//! Error types for the ambient parts of the application
//!
//! The sorting core never fails; stale or out-of-order input is absorbed as
//! an ignored outcome. These errors cover configuration, logging and
//! terminal I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardSwipeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CardSwipeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CardSwipeError::ConfigError("bad file".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad file");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CardSwipeError = io_err.into();
        assert!(matches!(err, CardSwipeError::Io(_)));
        assert_eq!(err.to_string(), "missing");
    }
}
