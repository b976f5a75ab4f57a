//! OneBoard CLI
//!
//! ## Usage
//!
//! ```bash
//! oneboard press 12+7=             # Print the final display
//! oneboard press 2 + 3 = --trace   # Show the display after every key
//! oneboard repl                    # One session, one key sequence per line
//! oneboard tui                     # Interactive keypad
//! oneboard keypad                  # Print the layout
//! ```

use clap::Parser;
use oneboard_cli::{
    logging, run_keypad, run_press, Cli, CliConfig, CliResult, ColorChoice, Commands, OutputFormat,
    PressArgs, Repl, ReplArgs, Reporter, Verbosity,
};
use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    if !matches!(cli.command, Commands::Tui) {
        logging::init_stderr(config.verbosity);
    }

    match cli.command {
        Commands::Press(args) => press(config, &args),
        Commands::Repl(args) => repl(&config, &args),
        Commands::Tui => tui(&config),
        Commands::Keypad => run_keypad(&config, &mut io::stdout().lock()),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let color: ColorChoice = cli.color.into();
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(color)
}

fn press(config: CliConfig, args: &PressArgs) -> CliResult<()> {
    let config = config.with_format(OutputFormat::from(args.format));
    run_press(&config, &args.sequence(), args.trace, &mut io::stdout().lock())
}

fn repl(config: &CliConfig, args: &ReplArgs) -> CliResult<()> {
    let mut session = Repl::new(Reporter::from_config(config));
    let mut out = io::stdout().lock();
    match &args.input {
        Some(path) => session.run(BufReader::new(File::open(path)?), &mut out),
        None => session.run(io::stdin().lock(), &mut out),
    }
}

#[cfg(feature = "tui")]
fn tui(config: &CliConfig) -> CliResult<()> {
    logging::init_for_tui(config.verbosity)?;
    oneboard_cli::terminal::run_tui()
}

#[cfg(not(feature = "tui"))]
fn tui(_config: &CliConfig) -> CliResult<()> {
    Err(oneboard_cli::CliError::invalid_argument(
        "terminal UI not enabled. Rebuild with --features tui",
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_defaults() {
        let cli = Cli::parse_from(["oneboard", "keypad"]);
        let config = build_config(&cli);
        assert_eq!(config.verbosity, Verbosity::Normal);
        assert_eq!(config.color, ColorChoice::Auto);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_build_config_flags() {
        let cli = Cli::parse_from(["oneboard", "-q", "--color", "always", "keypad"]);
        let config = build_config(&cli);
        assert_eq!(config.verbosity, Verbosity::Quiet);
        assert_eq!(config.color, ColorChoice::Always);
    }
}
