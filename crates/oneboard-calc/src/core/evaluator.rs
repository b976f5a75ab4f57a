//! Immediate-execution evaluator
//!
//! A four-function calculator without precedence: every operator or equals
//! press applies the pending operation straight away, left to right.
//!
//! Two behaviours are kept on purpose because users already rely on them:
//!
//! - the pending operation is applied eagerly on every operator press, even
//!   when no new operand was typed (`2 + * 3 =` is `(2 + 2) * 3`);
//! - the last operator pressed wins the operator slot.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::format::{canonical_string, parse_number, ERROR_MARKER, INITIAL_DISPLAY};
use crate::core::key::{Digit, Key};
use crate::core::{CalcError, Operator};

/// Complete evaluator state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text currently shown: a numeral or the error marker
    pub display: String,
    /// Left-hand operand of the unresolved operation
    pub pending_operand: Option<f64>,
    /// Operator waiting for its right-hand operand
    pub pending_operator: Option<Operator>,
    /// The next digit starts a new numeral instead of appending
    pub awaiting_fresh_input: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending_operand: None,
            pending_operator: None,
            awaiting_fresh_input: false,
        }
    }
}

impl CalculatorState {
    /// Returns true while the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }
}

/// Key-press driven calculator
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    state: CalculatorState,
}

impl Evaluator {
    /// Creates an evaluator showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Returns the full state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns true while the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// Dispatches a key to the matching press operation
    pub fn press(&mut self, key: Key) -> &str {
        match key {
            Key::Digit(d) => self.press_digit(d),
            Key::Operator(op) => self.press_operator(op),
            Key::Equals => self.press_equals(),
            Key::Clear => self.press_clear(),
        }
    }

    /// Presses every key in order and returns the final display
    pub fn press_all<I>(&mut self, keys: I) -> &str
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.press(key);
        }
        self.display()
    }

    /// Digit press: start a new numeral or append to the current one
    pub fn press_digit(&mut self, digit: Digit) -> &str {
        let c = digit.as_char();
        if self.state.awaiting_fresh_input {
            self.state.display = c.to_string();
            self.state.awaiting_fresh_input = false;
        } else if self.state.display == INITIAL_DISPLAY {
            self.state.display = c.to_string();
        } else {
            self.state.display.push(c);
        }

        trace!(digit = %digit, display = %self.state.display, "digit pressed");
        &self.state.display
    }

    /// Operator press: store or eagerly resolve the operand, then take `op`
    pub fn press_operator(&mut self, op: Operator) -> &str {
        let current = parse_number(&self.state.display);

        match (self.state.pending_operand, self.state.pending_operator) {
            (None, _) => self.state.pending_operand = Some(current),
            (Some(operand), Some(pending)) => self.resolve(operand, current, pending),
            // Right after equals: the result is already the operand
            (Some(_), None) => {}
        }

        self.state.pending_operator = Some(op);
        self.state.awaiting_fresh_input = true;

        trace!(operator = %op, display = %self.state.display, "operator pressed");
        &self.state.display
    }

    /// Equals press: resolve the pending operation, no-op without one
    pub fn press_equals(&mut self) -> &str {
        let (Some(operand), Some(op)) = (self.state.pending_operand, self.state.pending_operator)
        else {
            trace!(display = %self.state.display, "equals ignored, nothing pending");
            return &self.state.display;
        };

        let current = parse_number(&self.state.display);
        self.resolve(operand, current, op);

        self.state.pending_operator = None;
        self.state.awaiting_fresh_input = true;

        trace!(display = %self.state.display, "equals pressed");
        &self.state.display
    }

    /// Clear press: back to the initial state
    pub fn press_clear(&mut self) -> &str {
        self.state = CalculatorState::default();
        trace!("cleared");
        &self.state.display
    }

    /// Applies `op` and stores the outcome as display and operand
    fn resolve(&mut self, operand: f64, current: f64, op: Operator) {
        match op.apply(operand, current) {
            Ok(result) => {
                self.state.display = canonical_string(result);
                self.state.pending_operand = Some(result);
            }
            Err(err) => self.enter_error(&err),
        }
    }

    /// Shows the error marker and drops the operand; the operator slot is left alone
    fn enter_error(&mut self, err: &CalcError) {
        debug!(error = %err, "arithmetic error, showing error marker");
        self.state.display = ERROR_MARKER.to_string();
        self.state.pending_operand = None;
        self.state.awaiting_fresh_input = true;
    }
}
