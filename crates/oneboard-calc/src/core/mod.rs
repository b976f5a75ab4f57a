//! Calculator core: operators, numerals, keys, the evaluator and its press tape
//!
//! Arithmetic errors never leave this module as `Err`: the evaluator folds
//! them into the display error marker. `CalcError` is what the helper
//! functions and key parsers return.

pub mod evaluator;
pub mod format;
pub mod key;
mod operations;
pub mod tape;

pub use operations::Operator;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted (includes `0 / 0`)
    #[error("Division by zero")]
    DivisionByZero,

    /// Arithmetic produced NaN or infinity
    #[error("Invalid result: {0}")]
    InvalidResult(String),

    /// A digit outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),

    /// A character that is not a calculator key
    #[error("Invalid key '{key}' at offset {offset}")]
    InvalidKey {
        /// The offending character
        key: char,
        /// Byte offset of the character in the parsed text
        offset: usize,
    },

    /// Snapshot or tape could not be serialized
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl CalcError {
    /// Create an invalid key error
    #[must_use]
    pub const fn invalid_key(key: char, offset: usize) -> Self {
        Self::InvalidKey { key, offset }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        let err = CalcError::DivisionByZero;
        assert_eq!(format!("{err}"), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_invalid_result() {
        let err = CalcError::InvalidResult("NaN".into());
        assert_eq!(format!("{err}"), "Invalid result: NaN");
    }

    #[test]
    fn test_calc_error_display_invalid_digit() {
        assert_eq!(CalcError::InvalidDigit(12).to_string(), "Invalid digit: 12");
    }

    #[test]
    fn test_calc_error_display_invalid_key() {
        let err = CalcError::invalid_key('%', 3);
        assert_eq!(err.to_string(), "Invalid key '%' at offset 3");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: CalcError = json_err.into();
        assert!(matches!(err, CalcError::Serialization(_)));
    }
}
