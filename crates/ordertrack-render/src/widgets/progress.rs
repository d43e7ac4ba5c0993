#![forbid(unsafe_code)]

//! Progress bar widget.

use super::Widget;
use crate::buffer::Buffer;
use crate::cell::Cell;
use crate::geometry::Rect;
use crate::style::Style;

/// A horizontal bar filled left to right.
#[derive(Debug, Clone, Copy)]
pub struct ProgressBar {
    ratio: f64,
    style: Style,
    gauge_style: Style,
    fill_char: char,
    track_char: char,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            ratio: 0.0,
            style: Style::default(),
            gauge_style: Style::default(),
            fill_char: '█',
            track_char: '░',
        }
    }
}

impl ProgressBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the progress ratio (clamped to 0.0..=1.0).
    #[must_use]
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Style of the unfilled track.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Style of the filled portion.
    #[must_use]
    pub fn gauge_style(mut self, style: Style) -> Self {
        self.gauge_style = style;
        self
    }

    /// Cells filled for a bar `width` cells wide.
    pub fn filled_width(&self, width: u16) -> u16 {
        if self.ratio >= 1.0 {
            width
        } else {
            (f64::from(width) * self.ratio).floor() as u16
        }
    }
}

impl Widget for ProgressBar {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let filled = self.filled_width(area.width);
        for y in area.y..area.bottom() {
            for (i, x) in (area.x..area.right()).enumerate() {
                let (c, style) = if (i as u16) < filled {
                    (self.fill_char, self.gauge_style)
                } else {
                    (self.track_char, self.style)
                };
                let mut cell = buf.get(x, y).copied().unwrap_or_else(|| Cell::from_char(' '));
                cell.content = c;
                style.apply(&mut cell);
                buf.set(x, y, cell);
            }
        }
    }
}
