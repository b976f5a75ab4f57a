//! TUI application state

use ratatui::layout::Rect;

use super::keypad::hit_test;
use crate::core::evaluator::{CalculatorState, Evaluator};
use crate::core::format::canonical_string;
use crate::core::key::Key;
use crate::core::tape::Tape;
use crate::keypad::Keypad;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    evaluator: Evaluator,
    keypad: Keypad,
    tape: Tape,
    /// Index of the last pressed keypad button
    highlighted: Option<usize>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self::with_tape(Tape::new())
    }

    /// Creates an app recording presses into `tape`
    #[must_use]
    pub fn with_tape(tape: Tape) -> Self {
        Self {
            evaluator: Evaluator::new(),
            keypad: Keypad::new(),
            tape,
            highlighted: None,
            should_quit: false,
        }
    }

    /// Presses `key` and highlights its button
    pub fn press(&mut self, key: Key) {
        let display = self.evaluator.press(key);
        self.tape.record(key, display);
        self.highlighted = self.keypad.find_by_key(key);
    }

    /// Presses the button under (`x`, `y`) when the keypad is drawn in `area`
    ///
    /// Returns false when the click missed every button.
    pub fn click(&mut self, area: Rect, x: u16, y: u16) -> bool {
        let Some(key) = hit_test(&self.keypad, area, x, y)
            .and_then(|index| self.keypad.buttons().get(index))
            .map(|btn| btn.key)
        else {
            return false;
        };
        self.press(key);
        true
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.evaluator.display()
    }

    /// Returns the evaluator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.evaluator.state()
    }

    /// Returns the press tape
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the highlighted button index
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Describes the pending operation, e.g. `12 +`
    #[must_use]
    pub fn status_line(&self) -> String {
        let state = self.evaluator.state();
        if state.is_error() {
            return "Press a digit or C".to_string();
        }
        match (state.pending_operand, state.pending_operator) {
            (Some(operand), Some(op)) => format!("{} {op}", canonical_string(operand)),
            _ => String::new(),
        }
    }
}
