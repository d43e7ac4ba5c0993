#![forbid(unsafe_code)]

//! Terminal order-tracking dashboard.
//!
//! [`build_model`] loads the orders named by the [`Opts`](cli::Opts) and
//! wraps them in the [`AppModel`](app::AppModel); the binary then either
//! drives it through a [`Program`](program::Program) on the terminal or
//! prints a single frame with [`write_frame`].

pub mod app;
pub mod cli;
pub mod error;
pub mod event;
pub mod logging;
pub mod program;
pub mod terminal;
pub mod theme;
pub mod views;

use std::io::{self, Write};
use std::time::Duration;

use ordertrack_core::dates::parse_instant;
use ordertrack_core::{Dashboard, JsonFileSource, OrderSource, SampleSource};
use tracing::info;

use crate::app::{AppModel, Clock};
use crate::cli::Opts;
pub use crate::error::{Error, Result};
use crate::program::{ProgramConfig, render_once};

/// The order source selected by `opts`.
#[must_use]
pub fn source_for(opts: &Opts) -> Box<dyn OrderSource> {
    match &opts.orders {
        Some(path) => Box::new(JsonFileSource::new(path).strict(opts.strict)),
        None => Box::new(SampleSource),
    }
}

/// The ETA reference clock selected by `opts`.
pub fn clock_for(opts: &Opts) -> Result<Clock> {
    match &opts.today {
        None => Ok(Clock::System),
        Some(text) => parse_instant(text)
            .map(Clock::Fixed)
            .ok_or_else(|| Error::Config(format!("Invalid --today value: {text}"))),
    }
}

/// Load the orders and build the dashboard model, with the initial query applied.
pub fn build_model(opts: &Opts) -> Result<AppModel> {
    let clock = clock_for(opts)?;
    let source = source_for(opts);
    let book = source.load()?;
    info!(source = %source.describe(), orders = book.len(), "orders loaded");

    let mut dashboard = Dashboard::new(book);
    if !opts.query.is_empty() {
        dashboard.set_query(opts.query.as_str());
    }
    Ok(AppModel::new(dashboard, clock).with_size(opts.width, opts.height))
}

/// Runtime settings for the interactive dashboard.
#[must_use]
pub fn program_config(opts: &Opts) -> ProgramConfig {
    ProgramConfig {
        exit_after: (opts.exit_after_ms > 0).then(|| Duration::from_millis(opts.exit_after_ms)),
        ..ProgramConfig::default()
    }
}

/// Render one `width` x `height` frame of `model` as plain text.
pub fn write_frame(model: &AppModel, width: u16, height: u16, mut out: impl Write) -> io::Result<()> {
    let buffer = render_once(model, width, height);
    writeln!(out, "{}", buffer.to_plain_text())?;
    out.flush()
}
