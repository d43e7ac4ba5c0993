#![forbid(unsafe_code)]

//! Presenter: state-tracked ANSI emission.
//!
//! The Presenter turns a [`BufferDiff`] into terminal output through
//! crossterm commands. It tracks the style last written so runs of equally
//! styled cells cost one SGR sequence, skips cursor moves between adjacent
//! cells, and wraps each frame in a synchronized update.
//!
//! # Usage
//!
//! ```
//! use ordertrack_render::buffer::Buffer;
//! use ordertrack_render::diff::BufferDiff;
//! use ordertrack_render::presenter::{ColorMode, Presenter};
//!
//! let prev = Buffer::new(10, 2);
//! let mut next = Buffer::new(10, 2);
//! next.draw_text(0, 0, "ok", Default::default(), 10);
//!
//! let mut presenter = Presenter::new(Vec::new(), ColorMode::Mono);
//! let written = presenter.present(&next, &BufferDiff::compute(&prev, &next), None)?;
//! assert_eq!(written, 2);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::env;
use std::io::{self, BufWriter, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{BeginSynchronizedUpdate, EndSynchronizedUpdate};

use crate::buffer::Buffer;
use crate::cell::{Cell, PackedRgba, StyleFlags};
use crate::diff::BufferDiff;
use crate::text::char_width;

/// Size of the internal write buffer (64KB).
const BUFFER_CAPACITY: usize = 64 * 1024;

/// Whether colors are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// 24-bit RGB.
    TrueColor,
    /// Attributes only.
    Mono,
}

impl ColorMode {
    /// `Mono` when `NO_COLOR` is set to a non-empty value.
    pub fn detect() -> Self {
        let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if no_color { Self::Mono } else { Self::TrueColor }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellStyle {
    fg: PackedRgba,
    bg: PackedRgba,
    flags: StyleFlags,
}

impl From<&Cell> for CellStyle {
    fn from(cell: &Cell) -> Self {
        Self {
            fg: cell.fg,
            bg: cell.bg,
            flags: cell.flags,
        }
    }
}

/// Writes buffers to a terminal-like sink.
pub struct Presenter<W: Write> {
    writer: BufWriter<W>,
    color: ColorMode,
    current: Option<CellStyle>,
}

impl<W: Write> Presenter<W> {
    pub fn new(writer: W, color: ColorMode) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            color,
            current: None,
        }
    }

    /// Emit the cells listed in `diff` from `next`, then place the cursor.
    ///
    /// The cursor is hidden unless `cursor` is given. Returns the number of
    /// cells written.
    pub fn present(
        &mut self,
        next: &Buffer,
        diff: &BufferDiff,
        cursor: Option<(u16, u16)>,
    ) -> io::Result<usize> {
        queue!(self.writer, BeginSynchronizedUpdate, Hide)?;

        let mut written = 0;
        let mut pen: Option<(u16, u16)> = None;
        let mut last_head: Option<(u16, u16)> = None;
        for (x, y) in diff.iter() {
            let Some((hx, cell)) = head_of(next, x, y) else {
                continue;
            };
            if last_head == Some((hx, y)) {
                continue;
            }
            if pen != Some((hx, y)) {
                queue!(self.writer, MoveTo(hx, y))?;
            }
            self.apply_style(cell)?;
            let width = char_width(cell.content);
            let glyph = if width == 0 { ' ' } else { cell.content };
            queue!(self.writer, Print(glyph))?;

            pen = Some((hx.saturating_add(width.max(1) as u16), y));
            last_head = Some((hx, y));
            written += 1;
        }

        queue!(self.writer, SetAttribute(Attribute::Reset), ResetColor)?;
        self.current = None;
        if let Some((cx, cy)) = cursor {
            queue!(self.writer, MoveTo(cx, cy), Show)?;
        }
        queue!(self.writer, EndSynchronizedUpdate)?;
        self.writer.flush()?;
        Ok(written)
    }

    fn apply_style(&mut self, cell: &Cell) -> io::Result<()> {
        let style = CellStyle::from(cell);
        if self.current == Some(style) {
            return Ok(());
        }
        queue!(self.writer, SetAttribute(Attribute::Reset))?;
        if self.color == ColorMode::TrueColor {
            queue!(
                self.writer,
                SetForegroundColor(to_color(style.fg)),
                SetBackgroundColor(to_color(style.bg))
            )?;
        }
        for (flag, attr) in [
            (StyleFlags::BOLD, Attribute::Bold),
            (StyleFlags::DIM, Attribute::Dim),
            (StyleFlags::ITALIC, Attribute::Italic),
            (StyleFlags::UNDERLINE, Attribute::Underlined),
            (StyleFlags::REVERSE, Attribute::Reverse),
        ] {
            if style.flags.contains(flag) {
                queue!(self.writer, SetAttribute(attr))?;
            }
        }
        self.current = Some(style);
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

/// The cell that owns position `(x, y)`: itself, or the wide character a
/// continuation cell belongs to.
fn head_of(buffer: &Buffer, x: u16, y: u16) -> Option<(u16, &Cell)> {
    let cell = buffer.get(x, y)?;
    if !cell.is_continuation() {
        return Some((x, cell));
    }
    let mut hx = x;
    while hx > 0 {
        hx -= 1;
        let head = buffer.get(hx, y)?;
        if !head.is_continuation() {
            return Some((hx, head));
        }
    }
    None
}

fn to_color(c: PackedRgba) -> Color {
    if c.is_transparent() {
        Color::Reset
    } else {
        Color::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    fn render(buf: &Buffer, mode: ColorMode) -> (usize, String) {
        let mut presenter = Presenter::new(Vec::new(), mode);
        let n = presenter
            .present(buf, &BufferDiff::full(buf), Some((0, 0)))
            .unwrap();
        let bytes = presenter.into_inner().unwrap();
        (n, String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn mono_emits_no_colors() {
        let mut buf = Buffer::new(4, 1);
        buf.draw_text(0, 0, "ab", Style::new().fg(PackedRgba::hex(0x0284c7)), 4);
        let (n, out) = render(&buf, ColorMode::Mono);
        assert_eq!(n, 4);
        assert!(out.contains("ab"));
        assert!(!out.contains("38;2;"));
    }

    #[test]
    fn truecolor_emits_rgb() {
        let mut buf = Buffer::new(2, 1);
        buf.draw_text(0, 0, "x", Style::new().fg(PackedRgba::rgb(2, 132, 199)), 2);
        let (_, out) = render(&buf, ColorMode::TrueColor);
        assert!(out.contains("38;2;2;132;199"));
    }

    #[test]
    fn wide_char_emitted_once() {
        let mut buf = Buffer::new(3, 1);
        buf.set(0, 0, Cell::from_char('日'));
        let (n, out) = render(&buf, ColorMode::Mono);
        assert_eq!(n, 2);
        assert_eq!(out.matches('日').count(), 1);
    }

    #[test]
    fn continuation_change_reemits_head() {
        let prev = Buffer::new(3, 1);
        let mut next = prev.clone();
        next.set(1, 0, Cell::from_char('日'));
        let mut presenter = Presenter::new(Vec::new(), ColorMode::Mono);
        let n = presenter
            .present(&next, &BufferDiff::compute(&prev, &next), None)
            .unwrap();
        assert_eq!(n, 1);
    }
}
