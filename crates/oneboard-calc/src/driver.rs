//! Display sinks and calculator drivers
//!
//! A driver feeds keys into an evaluator and exposes the display. The
//! `verify_*` functions below are written once against
//! [`CalculatorDriver`] and run against every front end.

use crate::core::evaluator::Evaluator;
use crate::core::key::{parse_keys, Key};
use crate::core::tape::Tape;
use crate::core::CalcResult;

/// Read-only output for the display text
pub trait DisplaySink {
    /// Shows `display`; called after every input event
    fn render(&mut self, display: &str);

    /// Gives the display keyboard focus
    fn focus(&mut self) {}
}

/// In-memory sink recording every rendered frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    frames: Vec<String>,
    focused: bool,
}

impl RecordingSink {
    /// Creates an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every frame rendered so far
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Returns the most recent frame
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    /// Returns whether focus was requested
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl DisplaySink for RecordingSink {
    fn render(&mut self, display: &str) {
        self.frames.push(display.to_string());
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

/// Common interface for anything that can be driven by key presses
pub trait CalculatorDriver {
    /// Presses a single key
    fn press(&mut self, key: Key);

    /// Returns the display text
    fn display(&self) -> String;

    /// Presses the clear key
    fn clear(&mut self) {
        self.press(Key::Clear);
    }

    /// Returns the press tape
    fn tape(&self) -> &Tape;

    /// Parses and presses a whole key sequence, returning the final display
    fn press_sequence(&mut self, sequence: &str) -> CalcResult<String> {
        for key in parse_keys(sequence)? {
            self.press(key);
        }
        Ok(self.display())
    }
}

/// Driver without a user interface, rendering into a [`DisplaySink`]
#[derive(Debug)]
pub struct HeadlessDriver<S: DisplaySink = RecordingSink> {
    evaluator: Evaluator,
    tape: Tape,
    sink: S,
}

impl Default for HeadlessDriver<RecordingSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDriver<RecordingSink> {
    /// Creates a driver rendering into a [`RecordingSink`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(RecordingSink::new())
    }
}

impl<S: DisplaySink> HeadlessDriver<S> {
    /// Creates a driver rendering into `sink`; the initial display is rendered at once
    pub fn with_sink(mut sink: S) -> Self {
        let evaluator = Evaluator::new();
        sink.focus();
        sink.render(evaluator.display());
        Self {
            evaluator,
            tape: Tape::new(),
            sink,
        }
    }

    /// Returns the evaluator
    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Returns the sink
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the driver and returns the sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: DisplaySink> CalculatorDriver for HeadlessDriver<S> {
    fn press(&mut self, key: Key) {
        let display = self.evaluator.press(key);
        self.sink.render(display);
        self.tape.record(key, display);
    }

    fn display(&self) -> String {
        self.evaluator.display().to_string()
    }

    fn tape(&self) -> &Tape {
        &self.tape
    }
}

/// Driver for the terminal app
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::key::Key;
    use crate::core::tape::Tape;
    use crate::tui::CalculatorApp;

    /// Drives a [`CalculatorApp`] without a terminal
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver around a fresh app
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver around an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns the underlying app mutably
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, key: Key) {
            self.app.press(key);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn tape(&self) -> &Tape {
            self.app.tape()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Behavioural checks shared by all drivers =====

#[allow(clippy::panic)]
fn expect_display<D: CalculatorDriver>(driver: &mut D, sequence: &str, expected: &str) {
    driver.clear();
    let display = driver
        .press_sequence(sequence)
        .unwrap_or_else(|e| panic!("sequence {sequence:?} failed to parse: {e}"));
    assert_eq!(display, expected, "sequence {sequence:?}");
}

/// Initial display and digit entry
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.display(), "0");
    expect_display(driver, "123", "123");
    expect_display(driver, "0007", "7");
}

/// The four operations, including a negative result
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "2+3=", "5");
    expect_display(driver, "5-2=", "3");
    expect_display(driver, "3*4=", "12");
    expect_display(driver, "8/2=", "4");
    expect_display(driver, "3-5=", "-2");
}

/// Division by zero and recovery without clear
#[allow(clippy::panic)]
pub fn verify_error_handling<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "5/0=", "Error");
    expect_display(driver, "0/0=", "Error");

    expect_display(driver, "5/0=", "Error");
    let display = driver
        .press_sequence("7")
        .unwrap_or_else(|e| panic!("digit failed to parse: {e}"));
    assert_eq!(display, "7");
    let display = driver
        .press_sequence("+2=")
        .unwrap_or_else(|e| panic!("sequence failed to parse: {e}"));
    assert_eq!(display, "9");
}

/// Eager apply, last-operator-wins, implicit right operand and repeated equals
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "2+3=*3=", "15");
    expect_display(driver, "2+*3=", "12");
    expect_display(driver, "2+=", "4");
    expect_display(driver, "2+3==", "5");
    expect_display(driver, "2+3=7", "7");
}

/// Clear returns to `0` from any state
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    expect_display(driver, "12+7*", "19");
    driver.clear();
    assert_eq!(driver.display(), "0");
    expect_display(driver, "1+2=", "3");
}

/// Runs every behavioural check
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_basic_arithmetic(driver);
    verify_error_handling(driver);
    verify_chaining(driver);
    verify_clear(driver);
}
