//! Result formatting

use console::style;
use oneboard_calc::core::evaluator::CalculatorState;
use oneboard_calc::core::format::ERROR_MARKER;
use oneboard_calc::core::tape::TapeEntry;
use serde::Serialize;

use crate::config::CliConfig;

/// Formats displays, tape lines and messages for the terminal
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub const fn new(use_color: bool, quiet: bool) -> Self {
        Self { use_color, quiet }
    }

    /// Create a reporter honouring the configured color and verbosity
    #[must_use]
    pub fn from_config(config: &CliConfig) -> Self {
        Self::new(config.use_color(), config.verbosity.is_quiet())
    }

    /// Formats a display value; the error marker stands out in red
    #[must_use]
    pub fn display(&self, display: &str) -> String {
        if !self.use_color {
            return display.to_string();
        }
        if display == ERROR_MARKER {
            style(display).red().bold().to_string()
        } else {
            style(display).green().bold().to_string()
        }
    }

    /// Formats one tape entry, indented
    #[must_use]
    pub fn tape_line(&self, entry: &TapeEntry) -> String {
        if self.use_color {
            format!(
                "  {} → {}",
                style(entry.key).yellow(),
                style(&entry.display).dim()
            )
        } else {
            format!("  {}", entry.line())
        }
    }

    /// Formats an error message
    #[must_use]
    pub fn failure(&self, message: &str) -> String {
        let prefix = if self.use_color {
            style("✗").red().bold().to_string()
        } else {
            "error:".to_string()
        };
        format!("{prefix} {message}")
    }

    /// Formats an informational message; `None` in quiet mode
    #[must_use]
    pub fn info(&self, message: &str) -> Option<String> {
        if self.quiet {
            return None;
        }
        let prefix = if self.use_color {
            style("ℹ").blue().bold().to_string()
        } else {
            "info:".to_string()
        };
        Some(format!("{prefix} {message}"))
    }
}

/// JSON document printed by `press --format json`
#[derive(Debug, Serialize)]
pub struct PressReport<'a> {
    /// The key sequence as given on the command line
    pub keys: &'a str,
    /// Final display
    pub display: &'a str,
    /// Final evaluator state
    pub state: &'a CalculatorState,
    /// Every press, oldest first, when tracing was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tape: Option<Vec<&'a TapeEntry>>,
}
