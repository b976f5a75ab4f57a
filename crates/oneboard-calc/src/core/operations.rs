//! The four binary operators and their arithmetic

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Binary operator on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators, in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the ASCII symbol used on the command line
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the glyph printed on the keypad button
    #[must_use]
    pub const fn label(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Returns a short name, used for button ids
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
        }
    }

    /// Maps an ASCII or typographic operator character
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to `a` (pending operand) and `b` (display value)
    ///
    /// Division by zero is an error even when `a` is zero. Results that are
    /// NaN or infinite are reported as [`CalcError::InvalidResult`].
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };
        Self::check_finite(result)
    }

    fn check_finite(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::InvalidResult("NaN".into()))
        } else if result.is_infinite() {
            Err(CalcError::InvalidResult("infinite".into()))
        } else {
            Ok(result)
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Symbols and labels ---

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), '+');
        assert_eq!(Operator::Subtract.symbol(), '-');
        assert_eq!(Operator::Multiply.symbol(), '*');
        assert_eq!(Operator::Divide.symbol(), '/');
    }

    #[test]
    fn test_operator_labels() {
        let labels: String = Operator::ALL.iter().map(Operator::label).collect();
        assert_eq!(labels, "÷×−+");
    }

    #[test]
    fn test_operator_display_uses_label() {
        assert_eq!(Operator::Multiply.to_string(), "×");
    }

    #[test]
    fn test_from_char_ascii_and_glyphs() {
        assert_eq!(Operator::from_char('+'), Some(Operator::Add));
        assert_eq!(Operator::from_char('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_char('−'), Some(Operator::Subtract));
        assert_eq!(Operator::from_char('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('x'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_char('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_char('÷'), Some(Operator::Divide));
        assert_eq!(Operator::from_char('%'), None);
        assert_eq!(Operator::from_char('^'), None);
    }

    #[test]
    fn test_from_char_inverts_symbol_and_label() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_char(op.symbol()), Some(op));
            assert_eq!(Operator::from_char(op.label()), Some(op));
        }
    }

    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&Operator::Divide).unwrap();
        assert_eq!(json, "\"divide\"");
        let op: Operator = serde_json::from_str("\"subtract\"").unwrap();
        assert_eq!(op, Operator::Subtract);
    }

    // --- Arithmetic ---

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(5.0, 2.0), Ok(3.0));
        assert_eq!(Operator::Multiply.apply(3.0, 4.0), Ok(12.0));
        assert_eq!(Operator::Divide.apply(8.0, 2.0), Ok(4.0));
    }

    #[test]
    fn test_apply_negative_result() {
        assert_eq!(Operator::Subtract.apply(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_zero_divided_by_zero_is_error() {
        assert_eq!(
            Operator::Divide.apply(0.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide_by_negative_zero() {
        assert_eq!(
            Operator::Divide.apply(1.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_is_invalid_result() {
        let err = Operator::Multiply.apply(f64::MAX, 2.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidResult(_)));
    }

    #[test]
    fn test_nan_operand_is_invalid_result() {
        let err = Operator::Add.apply(f64::NAN, 1.0).unwrap_err();
        assert_eq!(err, CalcError::InvalidResult("NaN".into()));
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assert_eq!(Operator::Add.apply(a, b), Operator::Add.apply(b, a));
        }

        #[test]
        fn prop_divide_nonzero_matches_float(a in -1e9f64..1e9, b in 1e-3f64..1e9) {
            prop_assert_eq!(Operator::Divide.apply(a, b), Ok(a / b));
        }

        #[test]
        fn prop_divide_by_zero_always_errors(a in any::<f64>()) {
            prop_assert_eq!(Operator::Divide.apply(a, 0.0), Err(CalcError::DivisionByZero));
        }
    }
}
