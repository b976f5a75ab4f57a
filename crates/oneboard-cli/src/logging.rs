//! Tracing subscriber setup
//!
//! `ONEBOARD_LOG` takes an `EnvFilter` directive such as
//! `oneboard_calc=trace`; without it the filter follows `-v`/`-q`.
//! Line-oriented commands log to stderr. The terminal UI owns the screen,
//! so it only logs when `ONEBOARD_LOG_FILE` names a file.

use std::fs::File;
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "ONEBOARD_LOG";

/// Environment variable naming the log file used by the terminal UI
pub const LOG_FILE_ENV: &str = "ONEBOARD_LOG_FILE";

/// Builds the filter from [`LOG_ENV`], falling back to the verbosity default
#[must_use]
pub fn build_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()))
}

/// Installs a subscriber writing to stderr
pub fn init_stderr(verbosity: Verbosity) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    // A second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(build_filter(verbosity))
        .with(layer)
        .try_init();
}

/// Installs a subscriber writing to `path`
pub fn init_file(path: &Path, verbosity: Verbosity) -> CliResult<()> {
    let file = File::create(path).map_err(|e| {
        CliError::invalid_argument(format!("cannot create log file {}: {e}", path.display()))
    })?;

    let layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(build_filter(verbosity))
        .with(layer)
        .try_init();
    Ok(())
}

/// Installs logging for the terminal UI if [`LOG_FILE_ENV`] is set
pub fn init_for_tui(verbosity: Verbosity) -> CliResult<()> {
    match std::env::var_os(LOG_FILE_ENV) {
        Some(path) => init_file(Path::new(&path), verbosity),
        None => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_fallback_does_not_panic() {
        for verbosity in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
        ] {
            let filter = build_filter(verbosity);
            assert!(!filter.to_string().is_empty());
        }
    }

    #[test]
    fn test_init_file_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("oneboard.log");
        init_file(&path, Verbosity::Debug).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_file_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("oneboard.log");
        let err = init_file(&path, Verbosity::Normal).unwrap_err();
        assert!(err.to_string().contains("cannot create log file"));
    }

    #[test]
    fn test_init_stderr_twice_is_harmless() {
        init_stderr(Verbosity::Quiet);
        init_stderr(Verbosity::Quiet);
    }
}
