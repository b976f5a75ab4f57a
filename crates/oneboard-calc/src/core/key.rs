//! Discrete input events: digit, operator, equals and clear presses

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{CalcError, CalcResult, Operator};

/// A single decimal digit, 0 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Digits in keypad order 0-9
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.value()) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::InvalidDigit(value))
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or_else(|| CalcError::invalid_key(c, 0))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An input event accepted by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Key {
    /// A digit button
    Digit(Digit),
    /// An operator button
    Operator(Operator),
    /// The equals button
    Equals,
    /// The clear button
    Clear,
}

impl Key {
    /// Creates a digit key, rejecting values above 9
    pub fn digit(d: u8) -> CalcResult<Self> {
        Digit::try_from(d).map(Self::Digit)
    }

    /// Maps a typed character to a key
    ///
    /// Accepts `0-9`, the operator characters understood by
    /// [`Operator::from_char`], `=` and `c`/`C`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Ok(d) = Digit::try_from(c) {
            return Some(Self::Digit(d));
        }
        if let Some(op) = Operator::from_char(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            _ => None,
        }
    }

    /// Returns the keypad caption
    #[must_use]
    pub fn label(&self) -> char {
        match self {
            Self::Digit(d) => d.as_char(),
            Self::Operator(op) => op.label(),
            Self::Equals => '=',
            Self::Clear => 'C',
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let mut keys = parse_keys(s)?;
        match (keys.pop(), keys.is_empty()) {
            (Some(key), true) => Ok(key),
            // More than one key, report the second one
            (Some(_), false) => {
                let offset = s
                    .char_indices()
                    .filter(|(_, c)| Key::from_char(*c).is_some())
                    .nth(1)
                    .map_or(0, |(i, _)| i);
                let key = s[offset..].chars().next().unwrap_or(' ');
                Err(CalcError::invalid_key(key, offset))
            }
            (None, _) => Err(CalcError::invalid_key(' ', 0)),
        }
    }
}

/// Parses a key sequence such as `"2 + 3 = * 3 ="`
///
/// ASCII whitespace and commas are skipped. Any other character that is not a
/// key fails with [`CalcError::InvalidKey`] carrying its byte offset.
pub fn parse_keys(text: &str) -> CalcResult<Vec<Key>> {
    text.char_indices()
        .filter(|(_, c)| !c.is_ascii_whitespace() && *c != ',')
        .map(|(offset, c)| Key::from_char(c).ok_or_else(|| CalcError::invalid_key(c, offset)))
        .collect()
}
