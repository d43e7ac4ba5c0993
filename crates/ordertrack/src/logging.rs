#![forbid(unsafe_code)]

//! Tracing subscriber setup.
//!
//! The filter comes from `ORDERTRACK_LOG`, then `RUST_LOG`, then `info`.
//! The interactive dashboard owns the terminal, so it only logs when a log
//! file is configured; the headless `--once` mode logs to stderr.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::cli::Opts;
use crate::error::{Error, Result};

const DEFAULT_DIRECTIVE: &str = "info";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    /// No subscriber is installed.
    Discard,
}

impl LogTarget {
    #[must_use]
    pub fn for_opts(opts: &Opts) -> Self {
        match &opts.log_file {
            Some(path) => Self::File(path.clone()),
            None if opts.once => Self::Stderr,
            None => Self::Discard,
        }
    }
}

/// Install the global subscriber for `target`.
pub fn init(target: &LogTarget) -> Result<()> {
    let filter = build_env_filter(std::env::var("ORDERTRACK_LOG").ok());
    let installed = match target {
        LogTarget::Discard => return Ok(()),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::Config(format!("cannot open log file {}: {e}", path.display())))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .try_init()
        }
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_ansi(io::stderr().is_terminal())
                    .without_time()
                    .compact(),
            )
            .try_init(),
    };
    installed.map_err(|e| Error::Config(format!("cannot install logger: {e}")))
}

/// `ORDERTRACK_LOG` directives if they parse, else `RUST_LOG`, else `info`.
fn build_env_filter(directives: Option<String>) -> EnvFilter {
    if let Some(directives) = directives
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::new(DEFAULT_DIRECTIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_selection() {
        let mut opts = Opts::default();
        assert_eq!(LogTarget::for_opts(&opts), LogTarget::Discard);
        opts.once = true;
        assert_eq!(LogTarget::for_opts(&opts), LogTarget::Stderr);
        opts.log_file = Some(PathBuf::from("ordertrack.log"));
        assert_eq!(
            LogTarget::for_opts(&opts),
            LogTarget::File(PathBuf::from("ordertrack.log"))
        );
    }

    #[test]
    fn explicit_directives_win() {
        let filter = build_env_filter(Some("ordertrack_core=debug".into()));
        assert_eq!(filter.to_string(), "ordertrack_core=debug");
    }

    #[test]
    fn discard_installs_nothing() {
        assert!(init(&LogTarget::Discard).is_ok());
    }
}
