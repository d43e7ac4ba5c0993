#![forbid(unsafe_code)]

//! Badge widget.
//!
//! A single-line label with background + foreground styling and left/right
//! padding, used for order status.

use super::{Alignment, Widget};
use crate::buffer::Buffer;
use crate::cell::Cell;
use crate::geometry::Rect;
use crate::style::Style;
use crate::text::display_width;

/// A compact label with padding and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Badge<'a> {
    label: &'a str,
    style: Style,
    pad_left: u16,
    pad_right: u16,
    alignment: Alignment,
}

impl<'a> Badge<'a> {
    /// Create a new badge with 1 cell padding on each side.
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: Style::default(),
            pad_left: 1,
            pad_right: 1,
            alignment: Alignment::Left,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Place the badge inside a wider area.
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Display width in terminal cells (label width + padding).
    #[inline]
    #[must_use]
    pub fn width(&self) -> u16 {
        let label_width = display_width(self.label) as u16;
        label_width
            .saturating_add(self.pad_left)
            .saturating_add(self.pad_right)
    }

    fn render_spaces(&self, buf: &mut Buffer, mut x: u16, y: u16, n: u16, max_x: u16) -> u16 {
        let mut cell = buf.get(x, y).copied().unwrap_or_else(|| Cell::from_char(' '));
        cell.content = ' ';
        self.style.apply(&mut cell);
        for _ in 0..n {
            if x >= max_x {
                break;
            }
            buf.set(x, y, cell);
            x = x.saturating_add(1);
        }
        x
    }
}

impl Widget for Badge<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let y = area.y;
        let max_x = area.right();
        let mut x = self.alignment.start_x(area, self.width());

        x = self.render_spaces(buf, x, y, self.pad_left, max_x);
        x = buf.draw_text(x, y, self.label, self.style, max_x);
        let _ = self.render_spaces(buf, x, y, self.pad_right, max_x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::PackedRgba;

    #[test]
    fn width_includes_padding() {
        assert_eq!(Badge::new("OK").width(), 4);
        assert_eq!(Badge::new("").width(), 2);
    }

    #[test]
    fn renders_padded_label_with_style() {
        let style = Style::new()
            .fg(PackedRgba::rgb(1, 2, 3))
            .bg(PackedRgba::rgb(4, 5, 6));
        let badge = Badge::new("OK").with_style(style);

        let mut buf = Buffer::new(10, 1);
        badge.render(Rect::new(0, 0, 10, 1), &mut buf);

        for (x, ch) in [' ', 'O', 'K', ' '].into_iter().enumerate() {
            let cell = buf.get(x as u16, 0).unwrap();
            assert_eq!(cell.content, ch);
            assert_eq!(cell.fg, PackedRgba::rgb(1, 2, 3));
            assert_eq!(cell.bg, PackedRgba::rgb(4, 5, 6));
        }
        assert!(buf.get(4, 0).unwrap().bg.is_transparent());
    }

    #[test]
    fn right_aligned() {
        let mut buf = Buffer::new(10, 1);
        Badge::new("OK")
            .with_alignment(Alignment::Right)
            .render(buf.area(), &mut buf);
        assert_eq!(buf.row_text(0), "       OK ");
    }

    #[test]
    fn truncates_in_small_area() {
        let mut buf = Buffer::new(2, 1);
        Badge::new("OK").render(Rect::new(0, 0, 2, 1), &mut buf);
        assert_eq!(buf.row_text(0), " O");
    }

    #[test]
    fn render_empty_area_is_noop() {
        let mut buf = Buffer::new(10, 1);
        Badge::new("Test").render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(buf.row_text(0).trim(), "");
    }
}
