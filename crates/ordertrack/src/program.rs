#![forbid(unsafe_code)]

//! Elm-style runtime: a [`Model`] reacts to messages and draws frames.
//!
//! Each loop iteration polls the [`EventSource`], converts events into the
//! model's message type, calls [`Model::update`], and redraws when anything
//! changed. Redraws go through a [`Presenter`] that only writes the cells
//! that differ from the previous frame.
//!
//! # Example
//!
//! ```
//! use ordertrack::event::Event;
//! use ordertrack::program::{Cmd, Model, render_once};
//! use ordertrack_render::Frame;
//!
//! struct Hello;
//!
//! impl Model for Hello {
//!     type Message = Event;
//!
//!     fn update(&mut self, _msg: Event) -> Cmd {
//!         Cmd::quit()
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         frame.buffer.draw_text(0, 0, "olá", Default::default(), 10);
//!     }
//! }
//!
//! let buffer = render_once(&Hello, 10, 1);
//! assert_eq!(buffer.to_plain_text(), "olá");
//! ```

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use ordertrack_render::buffer::Buffer;
use ordertrack_render::diff::BufferDiff;
use ordertrack_render::frame::Frame;
use ordertrack_render::presenter::{ColorMode, Presenter};
use tracing::{debug, info};

use crate::event::Event;
use crate::terminal::{SessionOptions, TerminalSession};

/// Application state and behavior.
pub trait Model {
    /// Messages the model reacts to. Terminal events convert into it.
    type Message: From<Event>;

    /// Called once before the first frame.
    fn init(&mut self) -> Cmd {
        Cmd::none()
    }

    /// The state transition function.
    fn update(&mut self, msg: Self::Message) -> Cmd;

    /// Draw the current state.
    fn view(&self, frame: &mut Frame);
}

/// What the runtime should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cmd {
    #[default]
    None,
    Quit,
}

impl Cmd {
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    #[inline]
    #[must_use]
    pub const fn quit() -> Self {
        Self::Quit
    }
}

/// Where the runtime gets its input and viewport size from.
pub trait EventSource {
    /// Current size (columns, rows).
    fn size(&self) -> io::Result<(u16, u16)>;

    /// `Ok(true)` if an event is ready within `timeout`.
    fn poll_event(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Next event. `Ok(None)` for input with no [`Event`] mapping.
    fn read_event(&mut self) -> io::Result<Option<Event>>;
}

/// Runtime settings.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    pub session: SessionOptions,
    /// Upper bound on how long one poll blocks.
    pub poll_interval: Duration,
    /// Quit on its own after this long.
    pub exit_after: Option<Duration>,
    pub color: ColorMode,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            session: SessionOptions {
                alternate_screen: true,
                bracketed_paste: true,
            },
            poll_interval: Duration::from_millis(250),
            exit_after: None,
            color: ColorMode::detect(),
        }
    }
}

/// The update/view loop.
pub struct Program<M: Model, E: EventSource, W: Write> {
    model: M,
    events: E,
    presenter: Presenter<W>,
    config: ProgramConfig,
    size: (u16, u16),
    /// Last presented buffer; `None` forces a full repaint.
    prev: Option<Buffer>,
    running: bool,
    dirty: bool,
    frames: u64,
}

impl<M: Model> Program<M, TerminalSession, Stdout> {
    /// Start a terminal session and build a program on it.
    pub fn with_config(model: M, config: ProgramConfig) -> io::Result<Self> {
        let session = TerminalSession::new(config.session)?;
        Self::new(model, session, io::stdout(), config)
    }
}

impl<M: Model, E: EventSource, W: Write> Program<M, E, W> {
    pub fn new(model: M, events: E, writer: W, config: ProgramConfig) -> io::Result<Self> {
        let size = events.size()?;
        let presenter = Presenter::new(writer, config.color);
        Ok(Self {
            model,
            events,
            presenter,
            config,
            size,
            prev: None,
            running: true,
            dirty: true,
            frames: 0,
        })
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Number of frames presented so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Tear down the program and hand back the model and the output sink.
    pub fn into_parts(self) -> io::Result<(M, W)> {
        let writer = self.presenter.into_inner()?;
        Ok((self.model, writer))
    }

    /// Run until the model returns [`Cmd::Quit`] or the exit deadline passes.
    pub fn run(&mut self) -> io::Result<()> {
        let started = Instant::now();
        let (width, height) = self.size;
        info!(width, height, "program starting");

        let cmd = self.model.init();
        self.execute(cmd);
        if self.running {
            // The model learns its viewport the same way it learns about resizes.
            self.handle_event(Event::Resize { width, height });
        }

        while self.running {
            if self.dirty {
                self.render_frame()?;
            }
            let Some(timeout) = self.timeout(started) else {
                info!("exit deadline reached");
                break;
            };
            if self.events.poll_event(timeout)? {
                loop {
                    if let Some(event) = self.events.read_event()? {
                        self.handle_event(event);
                    }
                    if !self.running || !self.events.poll_event(Duration::ZERO)? {
                        break;
                    }
                }
            }
        }

        info!(frames = self.frames, "program stopped");
        Ok(())
    }

    /// Poll timeout for the next iteration, `None` once the deadline passed.
    fn timeout(&self, started: Instant) -> Option<Duration> {
        match self.config.exit_after {
            None => Some(self.config.poll_interval),
            Some(limit) => {
                let remaining = limit.checked_sub(started.elapsed())?;
                if remaining.is_zero() {
                    return None;
                }
                Some(remaining.min(self.config.poll_interval))
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Resize { width, height } = event {
            if (width, height) != self.size {
                debug!(width, height, "resize");
            }
            self.size = (width, height);
            self.prev = None;
        }
        let cmd = self.model.update(M::Message::from(event));
        self.execute(cmd);
        self.dirty = true;
    }

    fn execute(&mut self, cmd: Cmd) {
        if cmd == Cmd::Quit {
            self.running = false;
        }
    }

    fn render_frame(&mut self) -> io::Result<()> {
        let (width, height) = self.size;
        let mut frame = Frame::new(width, height);
        self.model.view(&mut frame);

        let diff = match &self.prev {
            Some(prev) => BufferDiff::compute(prev, &frame.buffer),
            None => BufferDiff::full(&frame.buffer),
        };
        let written = self.presenter.present(&frame.buffer, &diff, frame.cursor)?;
        self.frames += 1;
        debug!(frame = self.frames, cells = written, "frame presented");

        self.prev = Some(frame.into_buffer());
        self.dirty = false;
        Ok(())
    }
}

/// Draw one frame of `model` without a terminal.
#[must_use]
pub fn render_once<M: Model>(model: &M, width: u16, height: u16) -> Buffer {
    let mut frame = Frame::new(width, height);
    model.view(&mut frame);
    frame.into_buffer()
}
