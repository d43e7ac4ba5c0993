#![forbid(unsafe_code)]

//! Widgets: stateless drawables that render into a [`Buffer`] area.
//!
//! Every widget is tiny-area safe: a zero-width or zero-height area is a
//! no-op, and output is clipped to the area it is given.

pub mod badge;
pub mod block;
pub mod input;
pub mod paragraph;
pub mod progress;

pub use badge::Badge;
pub use block::Block;
pub use input::TextInput;
pub use paragraph::Paragraph;
pub use progress::ProgressBar;

use crate::buffer::Buffer;
use crate::geometry::Rect;

/// Something that can draw itself into an area of a buffer.
pub trait Widget {
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Horizontal placement of content narrower than its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Starting column for content `width` cells wide inside `area`.
    pub fn start_x(self, area: Rect, width: u16) -> u16 {
        let slack = area.width.saturating_sub(width);
        match self {
            Self::Left => area.x,
            Self::Center => area.x + slack / 2,
            Self::Right => area.x + slack,
        }
    }
}
