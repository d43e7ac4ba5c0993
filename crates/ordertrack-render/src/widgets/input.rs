#![forbid(unsafe_code)]

//! Single-line text input display.
//!
//! The widget only draws; editing lives in the owner of the value. When the
//! value is wider than the area the tail is shown so the caret stays visible.

use super::Widget;
use crate::buffer::Buffer;
use crate::geometry::Rect;
use crate::style::Style;
use crate::text::{display_width, tail_to_width, truncate_to_width};

#[derive(Debug, Clone, Copy, Default)]
pub struct TextInput<'a> {
    value: &'a str,
    placeholder: &'a str,
    style: Style,
    placeholder_style: Style,
}

impl<'a> TextInput<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = text;
        self
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// The part of the value that is drawn in an area `width` cells wide.
    /// One column stays free for the caret.
    fn visible_value(&self, width: u16) -> &'a str {
        tail_to_width(self.value, usize::from(width.saturating_sub(1)))
    }

    /// Where the caret goes when rendered into `area`.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let shown = display_width(self.visible_value(area.width)) as u16;
        (area.x.saturating_add(shown), area.y)
    }
}

impl Widget for TextInput<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area.row(0), self.style);
        if self.value.is_empty() {
            let hint = truncate_to_width(self.placeholder, usize::from(area.width));
            buf.draw_text(area.x, area.y, hint, self.style.patch(self.placeholder_style), area.right());
        } else {
            let shown = self.visible_value(area.width);
            buf.draw_text(area.x, area.y, shown, self.style, area.right());
        }
    }
}
