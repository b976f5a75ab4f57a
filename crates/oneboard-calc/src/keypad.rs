//! Keypad layout shared by every front end
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ ÷ ]
//! [ 4 ] [ 5 ] [ 6 ] [ × ]
//! [ 1 ] [ 2 ] [ 3 ] [ − ]
//! [ 0 ] [ C ] [ = ] [ + ]
//! ```

use serde::Serialize;

use crate::core::key::{Digit, Key};
use crate::core::Operator;

/// A button on the keypad grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeypadButton {
    /// Key sent to the evaluator when pressed
    pub key: Key,
    /// Stable element id, e.g. `btn-7` or `btn-divide`
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button at the given grid position
    #[must_use]
    pub fn new(key: Key, row: usize, col: usize) -> Self {
        let id = match key {
            Key::Digit(d) => format!("btn-{d}"),
            Key::Operator(op) => format!("btn-{}", op.name()),
            Key::Equals => "btn-equals".to_string(),
            Key::Clear => "btn-clear".to_string(),
        };
        Self { key, id, row, col }
    }

    /// Returns the caption printed on the button
    #[must_use]
    pub fn label(&self) -> char {
        self.key.label()
    }
}

/// The 4×4 calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let d = |n: usize| Key::Digit(Digit::ALL[n]);
        let layout = [
            [d(7), d(8), d(9), Key::Operator(Operator::Divide)],
            [d(4), d(5), d(6), Key::Operator(Operator::Multiply)],
            [d(1), d(2), d(3), Key::Operator(Operator::Subtract)],
            [d(0), Key::Clear, Key::Equals, Key::Operator(Operator::Add)],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, keys)| {
                keys.iter()
                    .enumerate()
                    .map(move |(col, key)| KeypadButton::new(*key, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: layout.len(),
            cols: layout[0].len(),
        }
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns all buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Returns the button at the given grid position
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Returns the index of the button sending `key`
    #[must_use]
    pub fn find_by_key(&self, key: Key) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Returns the button with the given element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Renders the layout as text, one bracketed caption per button
    #[must_use]
    pub fn render_text(&self) -> String {
        self.buttons
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(|b| format!("[ {} ]", b.label()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
