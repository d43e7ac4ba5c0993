#![forbid(unsafe_code)]

//! Block widget: a filled background with an optional rounded border.

use super::Widget;
use crate::buffer::Buffer;
use crate::cell::Cell;
use crate::geometry::Rect;
use crate::style::Style;

const TOP_LEFT: char = '╭';
const TOP_RIGHT: char = '╮';
const BOTTOM_LEFT: char = '╰';
const BOTTOM_RIGHT: char = '╯';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

#[derive(Debug, Clone, Copy, Default)]
pub struct Block {
    bordered: bool,
    style: Style,
    border_style: Style,
    padding: u16,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// A block with a rounded border.
    pub fn bordered() -> Self {
        Self {
            bordered: true,
            ..Self::default()
        }
    }

    /// Style of the whole block area; its background fills the inside.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Columns of horizontal padding inside the border.
    #[must_use]
    pub fn padding(mut self, columns: u16) -> Self {
        self.padding = columns;
        self
    }

    /// The area left for content.
    pub fn inner(&self, area: Rect) -> Rect {
        let border = if self.bordered { area.inset(1, 1) } else { area };
        Rect::new(
            border.x.saturating_add(self.padding),
            border.y,
            border.width.saturating_sub(self.padding.saturating_mul(2)),
            border.height,
        )
    }

    fn border_cell(&self, buf: &Buffer, x: u16, y: u16, c: char) -> Cell {
        let mut cell = buf.get(x, y).copied().unwrap_or_default();
        cell.content = c;
        self.style.patch(self.border_style).apply(&mut cell);
        cell
    }
}

impl Widget for Block {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(&buf.area());
        if area.is_empty() {
            return;
        }

        let mut blank = Cell::from_char(' ');
        self.style.apply(&mut blank);
        buf.fill(area, blank);

        if !self.bordered || area.width < 2 || area.height < 2 {
            return;
        }

        let (left, right) = (area.x, area.right() - 1);
        let (top, bottom) = (area.y, area.bottom() - 1);
        for x in left + 1..right {
            let cell = self.border_cell(buf, x, top, HORIZONTAL);
            buf.set(x, top, cell);
            let cell = self.border_cell(buf, x, bottom, HORIZONTAL);
            buf.set(x, bottom, cell);
        }
        for y in top + 1..bottom {
            let cell = self.border_cell(buf, left, y, VERTICAL);
            buf.set(left, y, cell);
            let cell = self.border_cell(buf, right, y, VERTICAL);
            buf.set(right, y, cell);
        }
        for (x, y, c) in [
            (left, top, TOP_LEFT),
            (right, top, TOP_RIGHT),
            (left, bottom, BOTTOM_LEFT),
            (right, bottom, BOTTOM_RIGHT),
        ] {
            let cell = self.border_cell(buf, x, y, c);
            buf.set(x, y, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::PackedRgba;

    #[test]
    fn draws_rounded_border() {
        let mut buf = Buffer::new(6, 3);
        Block::bordered().render(buf.area(), &mut buf);
        assert_eq!(buf.row_text(0), "╭────╮");
        assert_eq!(buf.row_text(1), "│    │");
        assert_eq!(buf.row_text(2), "╰────╯");
    }

    #[test]
    fn border_takes_block_background_under_border_color() {
        let border = PackedRgba::rgb(226, 232, 240);
        let mut buf = Buffer::new(5, 3);
        Block::bordered()
            .style(Style::new().bg(PackedRgba::WHITE))
            .border_style(Style::new().fg(border))
            .render(buf.area(), &mut buf);
        let corner = buf.get(0, 0).unwrap();
        assert_eq!(corner.content, '╭');
        assert_eq!((corner.fg, corner.bg), (border, PackedRgba::WHITE));
        assert_eq!(buf.get(2, 1).unwrap().bg, PackedRgba::WHITE);
    }

    #[test]
    fn inner_accounts_for_border_and_padding() {
        let block = Block::bordered().padding(1);
        assert_eq!(block.inner(Rect::new(0, 0, 10, 5)), Rect::new(2, 1, 6, 3));
        assert_eq!(Block::new().inner(Rect::new(1, 1, 4, 4)), Rect::new(1, 1, 4, 4));
    }

    #[test]
    fn fills_background() {
        let mut buf = Buffer::new(4, 2);
        Block::new()
            .style(Style::new().bg(PackedRgba::WHITE))
            .render(buf.area(), &mut buf);
        assert!(buf.cells().iter().all(|c| c.bg == PackedRgba::WHITE));
    }
}
