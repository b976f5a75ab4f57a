//! Error types for the CLI

use oneboard_calc::core::CalcError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Calculator library error
    #[error("{0}")]
    Calc(#[from] CalcError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal setup or teardown failed
    #[error("Terminal error: {message}")]
    Terminal {
        /// Error message
        message: String,
    },

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a terminal error
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_passes_message_through() {
        let err = CliError::from(CalcError::invalid_key('a', 3));
        assert_eq!(err.to_string(), "Invalid key 'a' at offset 3");
    }

    #[test]
    fn test_io_error() {
        let err = CliError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.to_string().contains("I/O error"));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_json_error() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = CliError::from(json_err);
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_terminal_error() {
        let err = CliError::terminal("raw mode unavailable");
        assert_eq!(err.to_string(), "Terminal error: raw mode unavailable");
    }

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("no keys given");
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("no keys given"));
    }
}
