#![forbid(unsafe_code)]

//! Paragraph widget: one or more lines of text, clipped to the area.

use super::{Alignment, Widget};
use crate::buffer::Buffer;
use crate::geometry::Rect;
use crate::style::Style;
use crate::text::{display_width, ellipsize};

#[derive(Debug, Clone, Copy, Default)]
pub struct Paragraph<'a> {
    text: &'a str,
    style: Style,
    alignment: Alignment,
}

impl<'a> Paragraph<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Widget for Paragraph<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        for (row, line) in (0..area.height).zip(self.text.lines()) {
            let line = ellipsize(line, area.width as usize);
            let width = display_width(&line) as u16;
            let x = self.alignment.start_x(area, width);
            buf.draw_text(x, area.y + row, &line, self.style, area.right());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_lines_get_ellipsis() {
        let mut buf = Buffer::new(8, 1);
        Paragraph::new("Rastreamento").render(buf.area(), &mut buf);
        assert_eq!(buf.row_text(0), "Rastrea…");
    }

    #[test]
    fn lines_beyond_height_are_dropped() {
        let mut buf = Buffer::new(5, 2);
        Paragraph::new("a\nb\nc").render(buf.area(), &mut buf);
        assert_eq!(buf.to_plain_text(), "a\nb");
    }

    #[test]
    fn centered() {
        let mut buf = Buffer::new(7, 1);
        Paragraph::new("40%")
            .alignment(Alignment::Center)
            .render(buf.area(), &mut buf);
        assert_eq!(buf.row_text(0), "  40%  ");
    }
}
