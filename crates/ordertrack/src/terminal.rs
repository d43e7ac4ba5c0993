#![forbid(unsafe_code)]

//! Owning the terminal for the lifetime of the dashboard.
//!
//! [`TerminalSession::new`] switches stdin to raw mode and then turns on each
//! [`Mode`] the [`SessionOptions`] ask for, pushing it onto a stack. Dropping
//! the session pops that stack, shows the cursor again, and leaves raw mode
//! last, so the shell gets back exactly the terminal it handed over.
//!
//! Release builds abort on panic and skip `Drop`, so a panic hook repeats the
//! teardown for every mode before the panic message is printed. On Unix a
//! guard thread does the same for SIGINT and SIGTERM and then exits with
//! `128 + signal`.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use crossterm::{cursor, event as cte, terminal};
use tracing::{debug, info};

use crate::event::Event;
use crate::program::EventSource;

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

/// Which terminal modes a session enables. All default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Draw on the alternate screen so the shell's scrollback survives.
    pub alternate_screen: bool,
    /// Deliver pasted text as one [`Event::Paste`].
    pub bracketed_paste: bool,
}

impl SessionOptions {
    /// Modes to enable, in enabling order.
    fn modes(self) -> Vec<Mode> {
        let mut modes = Vec::with_capacity(2);
        if self.alternate_screen {
            modes.push(Mode::AlternateScreen);
        }
        if self.bracketed_paste {
            modes.push(Mode::BracketedPaste);
        }
        modes
    }
}

/// A terminal mode that must be switched off again before exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    AlternateScreen,
    BracketedPaste,
}

impl Mode {
    /// Every mode, in enabling order.
    const ALL: [Mode; 2] = [Mode::AlternateScreen, Mode::BracketedPaste];

    fn name(self) -> &'static str {
        match self {
            Self::AlternateScreen => "alternate screen",
            Self::BracketedPaste => "bracketed paste",
        }
    }

    fn enable(self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Self::AlternateScreen => crossterm::queue!(out, terminal::EnterAlternateScreen)?,
            Self::BracketedPaste => crossterm::queue!(out, cte::EnableBracketedPaste)?,
        }
        out.flush()
    }

    fn disable(self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Self::AlternateScreen => crossterm::queue!(out, terminal::LeaveAlternateScreen)?,
            Self::BracketedPaste => crossterm::queue!(out, cte::DisableBracketedPaste)?,
        }
        out.flush()
    }
}

/// Undo `modes` newest first, then show the cursor. Errors are ignored so
/// every step is attempted.
fn tear_down(modes: &[Mode], out: &mut impl Write) {
    for mode in modes.iter().rev() {
        let _ = mode.disable(out);
    }
    let _ = crossterm::queue!(out, cursor::Show);
    let _ = out.flush();
}

/// Raw mode plus the enabled [`Mode`]s, restored on drop.
///
/// Only one session should exist at a time.
#[derive(Debug)]
pub struct TerminalSession {
    /// Enabled modes, oldest first.
    enabled: Vec<Mode>,
    #[cfg(unix)]
    signal_guard: Option<SignalGuard>,
}

impl TerminalSession {
    /// Enter raw mode and enable the requested modes.
    ///
    /// If a step fails, whatever was already enabled is undone before the
    /// error is returned.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        install_panic_hook();

        terminal::enable_raw_mode()?;
        info!("raw mode on");
        let mut session = Self {
            enabled: Vec::new(),
            #[cfg(unix)]
            signal_guard: None,
        };

        #[cfg(unix)]
        {
            session.signal_guard = Some(SignalGuard::spawn()?);
        }
        let mut stdout = io::stdout();
        for mode in options.modes() {
            mode.enable(&mut stdout)?;
            session.enabled.push(mode);
            debug!(mode = mode.name(), "terminal mode on");
        }
        Ok(session)
    }
}

impl EventSource for TerminalSession {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn poll_event(&mut self, timeout: Duration) -> io::Result<bool> {
        cte::poll(timeout)
    }

    fn read_event(&mut self) -> io::Result<Option<Event>> {
        Ok(Event::from_crossterm(cte::read()?))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        #[cfg(unix)]
        drop(self.signal_guard.take());

        tear_down(&self.enabled, &mut io::stdout());
        self.enabled.clear();
        let _ = terminal::disable_raw_mode();
        info!("terminal restored");
    }
}

/// Restore the terminal without knowing which modes are on.
fn restore_everything() {
    tear_down(&Mode::ALL, &mut io::stdout());
    let _ = terminal::disable_raw_mode();
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_everything();
            previous(info);
        }));
    });
}

/// Background thread that restores the terminal on SIGINT or SIGTERM.
#[cfg(unix)]
#[derive(Debug)]
struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    fn spawn() -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            if let Some(signal) = signals.forever().next() {
                tracing::warn!(signal, "exiting on signal");
                restore_everything();
                std::process::exit(128 + signal);
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_enable_nothing() {
        assert!(SessionOptions::default().modes().is_empty());
    }

    #[test]
    fn modes_follow_options_in_enabling_order() {
        let all = SessionOptions {
            alternate_screen: true,
            bracketed_paste: true,
        };
        assert_eq!(all.modes(), Mode::ALL);
        let paste_only = SessionOptions {
            bracketed_paste: true,
            ..SessionOptions::default()
        };
        assert_eq!(paste_only.modes(), vec![Mode::BracketedPaste]);
    }

    #[test]
    fn enable_writes_mode_sequences() {
        let mut out = Vec::new();
        for mode in Mode::ALL {
            mode.enable(&mut out).unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[?1049h\x1b[?2004h");
    }

    #[test]
    fn tear_down_reverses_and_shows_cursor() {
        let mut out = Vec::new();
        tear_down(&Mode::ALL, &mut out);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\x1b[?2004l\x1b[?1049l\x1b[?25h"
        );
    }

    // Raw mode itself would take over the test runner's terminal, so only the
    // escape sequences are checked here.
}
