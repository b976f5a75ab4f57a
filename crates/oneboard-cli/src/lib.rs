//! OneBoard command line front end
//!
//! Replays key sequences, runs a line-oriented session or opens the
//! interactive keypad on top of [`oneboard_calc`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod session;
#[cfg(feature = "tui")]
pub mod terminal;

pub use commands::{Cli, ColorArg, Commands, FormatArg, PressArgs, ReplArgs};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{PressReport, Reporter};
pub use session::{run_keypad, run_press, LineOutcome, Repl};
