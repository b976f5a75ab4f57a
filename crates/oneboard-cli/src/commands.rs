//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{ColorChoice, OutputFormat};

/// OneBoard calculator: immediate-execution four-function calculator
#[derive(Parser, Debug)]
#[command(name = "oneboard", version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a key sequence and print the final display
    Press(PressArgs),

    /// Read key sequences line by line into one session
    Repl(ReplArgs),

    /// Interactive keypad in the terminal
    Tui,

    /// Print the keypad layout
    Keypad,
}

/// Arguments for the press command
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Keys to press, e.g. `12+7=` or `2 + 3 =`; put `--` before a leading `-`
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: FormatArg,
}

impl PressArgs {
    /// Returns the key arguments joined into one sequence
    #[must_use]
    pub fn sequence(&self) -> String {
        self.keys.join(" ")
    }
}

/// Arguments for the repl command
#[derive(Args, Debug, Default)]
pub struct ReplArgs {
    /// Read lines from this file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain text
    #[default]
    Text,
    /// JSON document
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
