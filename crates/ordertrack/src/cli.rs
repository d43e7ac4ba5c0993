#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Arguments are parsed by hand. Every setting can also come from an
//! `ORDERTRACK_*` environment variable; explicit flags win over the
//! environment, which wins over the defaults.

use std::env;
use std::path::PathBuf;
use std::process;

use crate::error::{Error, Result};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
ordertrack: terminal order-tracking dashboard

USAGE:
    ordertrack [OPTIONS]

OPTIONS:
    --orders=PATH        Load orders from a JSON file (default: built-in sample)
    --query=TEXT         Start with this filter text
    --today=DATE         Compute ETAs against this date instead of now
    --strict             Refuse to start when a record fails validation
    --once               Print one frame as plain text and exit
    --width=N            Frame width for --once (default: 100)
    --height=N           Frame height for --once (default: 80)
    --log-file=PATH      Write logs to this file
    --exit-after-ms=N    Quit after N milliseconds (for testing)
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    typing             Edit the filter
    Backspace          Delete the last filter character
    Esc                Clear the filter, or quit when it is empty
    Up/Down            Scroll one line
    PgUp/PgDn          Scroll one page
    Home/End           Jump to the first/last order
    Ctrl+C             Quit

ENVIRONMENT VARIABLES:
    ORDERTRACK_ORDERS          Default for --orders
    ORDERTRACK_QUERY           Default for --query
    ORDERTRACK_TODAY           Default for --today
    ORDERTRACK_STRICT          Set to 1/true/yes to enable --strict
    ORDERTRACK_LOG             Log filter directives (default: info)
    ORDERTRACK_LOG_FILE        Default for --log-file
    ORDERTRACK_EXIT_AFTER_MS   Default for --exit-after-ms";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// JSON order file; the sample data when `None`.
    pub orders: Option<PathBuf>,
    /// Initial filter text.
    pub query: String,
    /// Fixed reference date for ETAs.
    pub today: Option<String>,
    pub strict: bool,
    /// Render a single headless frame to stdout.
    pub once: bool,
    pub width: u16,
    pub height: u16,
    pub log_file: Option<PathBuf>,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            orders: None,
            query: String::new(),
            today: None,
            strict: false,
            once: false,
            width: 100,
            height: 80,
            log_file: None,
            exit_after_ms: 0,
        }
    }
}

/// Outcome of parsing: options to run with, or an informational request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse the process arguments and environment.
    ///
    /// Prints help or version and exits when asked to; prints the problem and
    /// exits with status 1 on a bad argument.
    pub fn parse() -> Self {
        match Self::parse_from(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(Parsed::Run(opts)) => opts,
            Ok(Parsed::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Parsed::Version) => {
                println!("ordertrack {VERSION}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("{e}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` (without the program name) with `var` as the environment.
    pub fn parse_from<I, F>(args: I, var: F) -> Result<Parsed>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Environment first
        if let Some(val) = var("ORDERTRACK_ORDERS").filter(|v| !v.is_empty()) {
            opts.orders = Some(PathBuf::from(val));
        }
        if let Some(val) = var("ORDERTRACK_QUERY") {
            opts.query = val;
        }
        if let Some(val) = var("ORDERTRACK_TODAY").filter(|v| !v.is_empty()) {
            opts.today = Some(val);
        }
        if let Some(val) = var("ORDERTRACK_STRICT") {
            opts.strict = truthy(&val);
        }
        if let Some(val) = var("ORDERTRACK_LOG_FILE").filter(|v| !v.is_empty()) {
            opts.log_file = Some(PathBuf::from(val));
        }
        if let Some(val) = var("ORDERTRACK_EXIT_AFTER_MS")
            && let Ok(n) = val.parse()
        {
            opts.exit_after_ms = n;
        }

        // Flags override
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Parsed::Help),
                "--version" | "-V" => return Ok(Parsed::Version),
                "--strict" => opts.strict = true,
                "--once" => opts.once = true,
                other => {
                    if let Some(val) = other.strip_prefix("--orders=") {
                        opts.orders = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--query=") {
                        opts.query = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--today=") {
                        opts.today = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        opts.log_file = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--width=") {
                        opts.width = dimension("--width", val)?;
                    } else if let Some(val) = other.strip_prefix("--height=") {
                        opts.height = dimension("--height", val)?;
                    } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                        opts.exit_after_ms = val.parse().map_err(|_| {
                            Error::Config(format!("Invalid --exit-after-ms value: {val}"))
                        })?;
                    } else {
                        return Err(Error::Config(format!("Unknown argument: {other}")));
                    }
                }
            }
        }

        Ok(Parsed::Run(opts))
    }
}

fn truthy(val: &str) -> bool {
    matches!(
        val.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn dimension(flag: &str, val: &str) -> Result<u16> {
    match val.parse::<u16>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::Config(format!("Invalid {flag} value: {val}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(args: &[&str], vars: &[(&str, &str)]) -> Result<Parsed> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Opts::parse_from(args.iter().map(|s| s.to_string()), |k| vars.get(k).cloned())
    }

    fn run(args: &[&str], vars: &[(&str, &str)]) -> Opts {
        match parse(args, vars) {
            Ok(Parsed::Run(opts)) => opts,
            other => panic!("expected options, got {other:?}"),
        }
    }

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.orders, None);
        assert_eq!(opts.query, "");
        assert!(!opts.strict);
        assert!(!opts.once);
        assert_eq!((opts.width, opts.height), (100, 80));
        assert_eq!(opts.exit_after_ms, 0);
        assert_eq!(run(&[], &[]), opts);
    }

    #[test]
    fn flags() {
        let opts = run(
            &[
                "--orders=pedidos.json",
                "--query=kdu",
                "--today=2025-10-08",
                "--strict",
                "--once",
                "--width=80",
                "--height=40",
                "--log-file=ot.log",
                "--exit-after-ms=250",
            ],
            &[],
        );
        assert_eq!(opts.orders, Some(PathBuf::from("pedidos.json")));
        assert_eq!(opts.query, "kdu");
        assert_eq!(opts.today.as_deref(), Some("2025-10-08"));
        assert!(opts.strict && opts.once);
        assert_eq!((opts.width, opts.height), (80, 40));
        assert_eq!(opts.log_file, Some(PathBuf::from("ot.log")));
        assert_eq!(opts.exit_after_ms, 250);
    }

    #[test]
    fn flags_override_environment() {
        let env = [
            ("ORDERTRACK_QUERY", "tecidos"),
            ("ORDERTRACK_ORDERS", "env.json"),
            ("ORDERTRACK_STRICT", "yes"),
            ("ORDERTRACK_EXIT_AFTER_MS", "10"),
        ];
        let opts = run(&["--query=3101"], &env);
        assert_eq!(opts.query, "3101");
        assert_eq!(opts.orders, Some(PathBuf::from("env.json")));
        assert!(opts.strict);
        assert_eq!(opts.exit_after_ms, 10);
    }

    #[test]
    fn strict_env_values() {
        assert!(!run(&[], &[("ORDERTRACK_STRICT", "0")]).strict);
        assert!(run(&[], &[("ORDERTRACK_STRICT", "TRUE")]).strict);
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse(&["--query=x", "-h"], &[]).unwrap(), Parsed::Help);
        assert_eq!(parse(&["--version"], &[]).unwrap(), Parsed::Version);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(parse(&["--width=0"], &[]), Err(Error::Config(_))));
        assert!(matches!(parse(&["--height=tall"], &[]), Err(Error::Config(_))));
        assert!(matches!(parse(&["--exit-after-ms=-1"], &[]), Err(Error::Config(_))));
        let err = parse(&["--bogus"], &[]).unwrap_err();
        assert_eq!(err.to_string(), "configuration error: Unknown argument: --bogus");
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_mentions_every_flag() {
        for flag in ["--orders", "--query", "--today", "--strict", "--once", "--log-file"] {
            assert!(HELP_TEXT.contains(flag), "{flag}");
        }
    }
}
