#![forbid(unsafe_code)]

//! A frame: the buffer a view draws into, plus the cursor position it asks for.

use crate::buffer::Buffer;
use crate::geometry::Rect;

#[derive(Debug, Clone)]
pub struct Frame {
    pub buffer: Buffer,
    /// Where the terminal cursor should be shown after presenting, if anywhere.
    pub cursor: Option<(u16, u16)>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            cursor: None,
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    #[inline]
    pub fn area(&self) -> Rect {
        self.buffer.area()
    }

    /// Request the cursor at `(x, y)`; ignored if outside the frame.
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        if self.area().contains(x, y) {
            self.cursor = Some((x, y));
        }
    }

    /// Consume the frame, keeping its buffer.
    pub fn into_buffer(self) -> Buffer {
        self.buffer
    }
}
