//! Terminal front end built on ratatui
//!
//! The app owns an [`Evaluator`](crate::core::evaluator::Evaluator) and
//! draws the display, the pending operation, the tape and a clickable
//! keypad. The event loop itself lives in the `oneboard` binary.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{hit_test, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI, HELP_SHORTCUTS, TITLE};
