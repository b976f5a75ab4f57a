//! OneBoard calculator engine
//!
//! An immediate-execution four-function calculator as found on the OneBoard
//! dashboard. Keys go in one at a time and the display string comes out;
//! there is no expression parsing and no operator precedence.
//!
//! # Example
//!
//! ```rust
//! use oneboard_calc::prelude::*;
//!
//! let mut calc = Evaluator::new();
//! assert_eq!(calc.display(), "0");
//!
//! let keys = parse_keys("12+7*2=").unwrap();
//! assert_eq!(calc.press_all(keys), "38");
//!
//! calc.press(Key::Clear);
//! let keys = parse_keys("5/0=").unwrap();
//! assert_eq!(calc.press_all(keys), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{CalculatorState, Evaluator};
    pub use crate::core::format::{canonical_string, parse_number, ERROR_MARKER, INITIAL_DISPLAY};
    pub use crate::core::key::{parse_keys, Digit, Key};
    pub use crate::core::tape::{Tape, TapeEntry};
    pub use crate::core::{CalcError, CalcResult, Operator};
    pub use crate::driver::{CalculatorDriver, DisplaySink, HeadlessDriver, RecordingSink};
    pub use crate::keypad::{Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
