//! Line-oriented commands: `press`, `repl` and `keypad`

use std::io::{BufRead, Write};

use oneboard_calc::core::key::parse_keys;
use oneboard_calc::driver::{CalculatorDriver, HeadlessDriver};
use oneboard_calc::keypad::Keypad;
use tracing::{debug, info, warn};

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;
use crate::output::{PressReport, Reporter};

/// Replays `sequence` from the initial state and writes the result
///
/// Text output lists the tape first when `trace` is set or with `-v`.
pub fn run_press<W: Write>(
    config: &CliConfig,
    sequence: &str,
    trace: bool,
    out: &mut W,
) -> CliResult<()> {
    let keys = parse_keys(sequence)?;
    debug!(keys = keys.len(), "replaying key sequence");

    let mut driver = HeadlessDriver::new();
    for key in keys {
        driver.press(key);
    }

    match config.format {
        OutputFormat::Json => {
            let display = driver.display();
            let report = PressReport {
                keys: sequence,
                display: &display,
                state: driver.evaluator().state(),
                tape: trace.then(|| driver.tape().iter().collect()),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Text => {
            let reporter = Reporter::from_config(config);
            if trace || config.verbosity.is_verbose() {
                for entry in driver.tape().iter() {
                    writeln!(out, "{}", reporter.tape_line(entry))?;
                }
            }
            writeln!(out, "{}", reporter.display(&driver.display()))?;
        }
    }
    Ok(())
}

/// What a single REPL line did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keys were pressed; carries the new display
    Display(String),
    /// The line could not be parsed; nothing was pressed
    Invalid(String),
    /// Blank line
    Skip,
    /// `quit` or `exit`
    Quit,
}

/// A persistent calculator session fed one line at a time
#[derive(Debug, Default)]
pub struct Repl {
    driver: HeadlessDriver,
    reporter: Reporter,
}

impl Repl {
    /// Creates a session showing `0`
    #[must_use]
    pub fn new(reporter: Reporter) -> Self {
        Self {
            driver: HeadlessDriver::new(),
            reporter,
        }
    }

    /// Returns the current display
    #[must_use]
    pub fn display(&self) -> String {
        self.driver.display()
    }

    /// Applies one input line
    pub fn handle_line(&mut self, line: &str) -> LineOutcome {
        let line = line.trim();
        match line {
            "" => LineOutcome::Skip,
            "quit" | "exit" => LineOutcome::Quit,
            _ => match self.driver.press_sequence(line) {
                Ok(display) => LineOutcome::Display(display),
                Err(e) => {
                    warn!(error = %e, "rejected input line");
                    LineOutcome::Invalid(e.to_string())
                }
            },
        }
    }

    /// Reads lines until end of input or `quit`, writing the display after each
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> CliResult<()> {
        if let Some(banner) = self.reporter.info("keys: 0-9 + - * / = C; quit to leave") {
            writeln!(out, "{banner}")?;
        }

        for line in input.lines() {
            match self.handle_line(&line?) {
                LineOutcome::Display(display) => {
                    writeln!(out, "{}", self.reporter.display(&display))?;
                }
                LineOutcome::Invalid(message) => {
                    writeln!(out, "{}", self.reporter.failure(&message))?;
                }
                LineOutcome::Skip => {}
                LineOutcome::Quit => break,
            }
        }

        info!(presses = self.driver.tape().len(), "session ended");
        Ok(())
    }
}

/// Writes the keypad layout followed by the button ids
pub fn run_keypad<W: Write>(config: &CliConfig, out: &mut W) -> CliResult<()> {
    let keypad = Keypad::new();
    writeln!(out, "{}", keypad.render_text())?;

    if !config.verbosity.is_quiet() {
        writeln!(out)?;
        for btn in keypad.buttons() {
            writeln!(out, "{:<12} {} ({}, {})", btn.id, btn.label(), btn.row, btn.col)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, Verbosity};
    use oneboard_calc::core::CalcError;
    use std::io::Cursor;

    fn plain() -> CliConfig {
        CliConfig::new().with_color(ColorChoice::Never)
    }

    fn press(config: &CliConfig, sequence: &str, trace: bool) -> String {
        let mut out = Vec::new();
        run_press(config, sequence, trace, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    // ===== press =====

    #[test]
    fn test_press_text() {
        assert_eq!(press(&plain(), "12+7=", false), "19\n");
    }

    #[test]
    fn test_press_error_marker() {
        assert_eq!(press(&plain(), "5/0=", false), "Error\n");
    }

    #[test]
    fn test_press_trace_lists_every_key() {
        let output = press(&plain(), "2+3=", true);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines, ["  2 → 2", "  + → 2", "  3 → 3", "  = → 5", "5"]);
    }

    #[test]
    fn test_press_x_is_multiply() {
        assert_eq!(press(&plain(), "4x3=", false), "12\n");
    }

    #[test]
    fn test_press_verbose_lists_tape() {
        let config = plain().with_verbosity(Verbosity::Verbose);
        let output = press(&config, "6/3=", false);
        assert_eq!(output.lines().count(), 5);
        assert!(output.ends_with("  = → 2\n2\n"));
    }

    #[test]
    fn test_press_json() {
        let config = plain().with_format(OutputFormat::Json);
        let output = press(&config, "12+", false);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["keys"], "12+");
        assert_eq!(json["display"], "12");
        assert_eq!(json["state"]["pending_operator"], "add");
        assert!(json.get("tape").is_none());
    }

    #[test]
    fn test_press_json_with_trace() {
        let config = plain().with_format(OutputFormat::Json);
        let output = press(&config, "9=", true);
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["tape"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_press_invalid_key() {
        let mut out = Vec::new();
        let err = run_press(&plain(), "1+%", false, &mut out).unwrap_err();
        assert!(matches!(
            err,
            crate::CliError::Calc(CalcError::InvalidKey { key: '%', offset: 2 })
        ));
        assert!(out.is_empty());
    }

    // ===== repl =====

    #[test]
    fn test_repl_handle_line() {
        let mut repl = Repl::default();
        assert_eq!(repl.handle_line("12+"), LineOutcome::Display("12".into()));
        assert_eq!(repl.handle_line("  7 = "), LineOutcome::Display("19".into()));
        assert_eq!(repl.handle_line(""), LineOutcome::Skip);
        assert_eq!(repl.handle_line("exit"), LineOutcome::Quit);
        assert_eq!(repl.display(), "19");
    }

    #[test]
    fn test_repl_invalid_line_keeps_session() {
        let mut repl = Repl::default();
        repl.handle_line("4*");
        let outcome = repl.handle_line("2a");
        assert!(matches!(outcome, LineOutcome::Invalid(ref m) if m.contains("Invalid key 'a'")));
        assert_eq!(repl.handle_line("2="), LineOutcome::Display("8".into()));
    }

    #[test]
    fn test_repl_run() {
        let mut repl = Repl::new(Reporter::new(false, true));
        let input = Cursor::new("2+3=\n\n*3=\nbogus\nquit\n9\n");
        let mut out = Vec::new();
        repl.run(input, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "5");
        assert_eq!(lines[1], "15");
        assert!(lines[2].starts_with("error: Invalid key 'b'"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_repl_banner_unless_quiet() {
        let mut repl = Repl::new(Reporter::new(false, false));
        let mut out = Vec::new();
        repl.run(Cursor::new(""), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("info:"));
    }

    // ===== keypad =====

    #[test]
    fn test_keypad_layout_and_ids() {
        let mut out = Vec::new();
        run_keypad(&plain(), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("[ 7 ] [ 8 ] [ 9 ] [ ÷ ]"));
        assert!(output.contains("btn-divide"));
        assert!(output.contains("btn-clear"));
    }

    #[test]
    fn test_keypad_quiet_prints_layout_only() {
        let mut out = Vec::new();
        let config = plain().with_verbosity(Verbosity::Quiet);
        run_keypad(&config, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().count(), 4);
    }
}
