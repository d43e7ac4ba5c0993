#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The `Buffer` is a 2D grid of [`Cell`]s representing the terminal display.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. A wide character is always followed by its continuation cells; writes
//!    that split one clear the orphaned half

use crate::cell::Cell;
use crate::geometry::Rect;
use crate::style::Style;
use crate::text::char_width;

/// A 2D grid of terminal cells.
///
/// # Example
///
/// ```
/// use ordertrack_render::buffer::Buffer;
/// use ordertrack_render::cell::Cell;
///
/// let mut buffer = Buffer::new(80, 24);
/// buffer.set(0, 0, Cell::from_char('H'));
/// buffer.set(1, 0, Cell::from_char('i'));
/// assert_eq!(buffer.row_text(0).trim_end(), "Hi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer of default cells. Zero-sized buffers are allowed and
    /// ignore every write.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Write a cell. Out-of-bounds writes are ignored.
    ///
    /// A wide character also claims the cells to its right; if it does not
    /// fit, a space is written instead.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        self.clear_overlapped(x, y);

        let width = char_width(cell.content).max(1);
        if width > 1 && usize::from(x) + width > usize::from(self.width) {
            self.cells[idx] = Cell {
                content: ' ',
                ..cell
            };
            return;
        }
        self.cells[idx] = cell;
        for dx in 1..width as u16 {
            self.clear_overlapped(x + dx, y);
            self.cells[idx + dx as usize] = Cell {
                content: Cell::CONTINUATION,
                ..cell
            };
        }
    }

    /// Blank the other half of any wide character that cell `(x, y)` is part of.
    fn clear_overlapped(&mut self, x: u16, y: u16) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        if self.cells[idx].is_continuation() {
            let mut hx = x;
            while hx > 0 {
                hx -= 1;
                let Some(h) = self.index(hx, y) else { break };
                let was_continuation = self.cells[h].is_continuation();
                self.cells[h].content = ' ';
                if !was_continuation {
                    break;
                }
            }
        }
        let head_width = char_width(self.cells[idx].content);
        for dx in 1..head_width as u16 {
            if let Some(t) = self.index(x.saturating_add(dx), y)
                && self.cells[t].is_continuation()
            {
                self.cells[t].content = ' ';
            }
        }
    }

    /// Fill a rectangle (clipped to the buffer) with `cell`.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let rect = rect.intersection(&self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Apply `style` to every cell in `rect` without touching content.
    pub fn set_style(&mut self, rect: Rect, style: Style) {
        let rect = rect.intersection(&self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    style.apply(cell);
                }
            }
        }
    }

    /// Draw `text` starting at `(x, y)`, stopping before `max_x`.
    ///
    /// Each cell keeps its current colors where `style` leaves them unset.
    /// Returns the column after the last character drawn.
    pub fn draw_text(&mut self, mut x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
        let max_x = max_x.min(self.width);
        for c in text.chars() {
            let w = char_width(c) as u16;
            if w == 0 {
                continue;
            }
            if x.saturating_add(w) > max_x {
                break;
            }
            let mut cell = self.get(x, y).copied().unwrap_or_default();
            cell.content = c;
            style.apply(&mut cell);
            self.set(x, y, cell);
            x += w;
        }
        x
    }

    /// Copy the cells of `src_rect` in `src` so that its top-left lands on
    /// `(x, y)`. Both sides are clipped.
    ///
    /// Cells are copied verbatim, so wide characters keep their
    /// continuation cells as long as the rectangle does not split them.
    pub fn blit(&mut self, src: &Buffer, src_rect: Rect, x: u16, y: u16) {
        let src_rect = src_rect.intersection(&src.area());
        for dy in 0..src_rect.height {
            for dx in 0..src_rect.width {
                let (Some(cell), Some(dst)) = (
                    src.get(src_rect.x + dx, src_rect.y + dy),
                    self.index(x.saturating_add(dx), y.saturating_add(dy)),
                ) else {
                    continue;
                };
                self.cells[dst] = *cell;
            }
        }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Text of row `y` with continuation cells dropped.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .filter(|c| !c.is_continuation())
            .map(|c| c.content)
            .collect()
    }

    /// All rows as text, trailing spaces trimmed, joined by newlines.
    pub fn to_plain_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Find the first `(x, y)` where `needle` starts, by row text.
    ///
    /// Assumes single-width characters before the match.
    pub fn find(&self, needle: &str) -> Option<(u16, u16)> {
        (0..self.height).find_map(|y| {
            let row = self.row_text(y);
            row.find(needle)
                .map(|byte| (row[..byte].chars().count() as u16, y))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::PackedRgba;

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut buf = Buffer::new(3, 2);
        buf.set(5, 5, Cell::from_char('x'));
        assert!(buf.get(5, 5).is_none());
        assert_eq!(buf.to_plain_text(), "\n");
    }

    #[test]
    fn zero_sized_buffer() {
        let mut buf = Buffer::new(0, 0);
        buf.set(0, 0, Cell::from_char('x'));
        buf.draw_text(0, 0, "abc", Style::new(), 10);
        assert_eq!(buf.cells().len(), 0);
        assert_eq!(buf.to_plain_text(), "");
    }

    #[test]
    fn wide_char_claims_continuation() {
        let mut buf = Buffer::new(4, 1);
        buf.set(0, 0, Cell::from_char('日'));
        assert!(buf.get(1, 0).unwrap().is_continuation());
        assert_eq!(buf.row_text(0), "日  ");
    }

    #[test]
    fn overwriting_half_clears_other_half() {
        let mut buf = Buffer::new(4, 1);
        buf.set(0, 0, Cell::from_char('日'));
        buf.set(1, 0, Cell::from_char('x'));
        assert_eq!(buf.row_text(0), " x  ");

        buf.set(2, 0, Cell::from_char('本'));
        buf.set(2, 0, Cell::from_char('y'));
        assert_eq!(buf.row_text(0), " xy ");
    }

    #[test]
    fn wide_char_at_edge_becomes_space() {
        let mut buf = Buffer::new(3, 1);
        buf.set(2, 0, Cell::from_char('日'));
        assert_eq!(buf.row_text(0), "   ");
    }

    #[test]
    fn draw_text_clips_and_keeps_background() {
        let mut buf = Buffer::new(10, 1);
        buf.fill(buf.area(), Cell::from_char(' ').with_bg(PackedRgba::WHITE));
        let end = buf.draw_text(1, 0, "Faturado", Style::new().fg(PackedRgba::BLACK), 6);
        assert_eq!(end, 6);
        assert_eq!(buf.row_text(0), " Fatur    ");
        let cell = buf.get(1, 0).unwrap();
        assert_eq!(cell.bg, PackedRgba::WHITE);
        assert_eq!(cell.fg, PackedRgba::BLACK);
    }

    #[test]
    fn blit_copies_clipped_rows() {
        let mut card = Buffer::new(4, 3);
        card.draw_text(0, 0, "ab", Style::new(), 4);
        card.draw_text(0, 1, "cd", Style::new(), 4);
        card.draw_text(0, 2, "ef", Style::new(), 4);

        let mut screen = Buffer::new(6, 2);
        screen.blit(&card, Rect::new(0, 1, 4, 2), 1, 0);
        assert_eq!(screen.to_plain_text(), " cd\n ef");

        screen.blit(&card, card.area(), 4, 1);
        assert_eq!(screen.row_text(1), " ef ab");
    }

    #[test]
    fn find_locates_text() {
        let mut buf = Buffer::new(20, 3);
        buf.draw_text(4, 2, "Progresso", Style::new(), 20);
        assert_eq!(buf.find("Progresso"), Some((4, 2)));
        assert_eq!(buf.find("absent"), None);
    }
}
