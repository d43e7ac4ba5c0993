#![forbid(unsafe_code)]

//! Cells and colors.
//!
//! A [`Cell`] is one terminal column in one row. Characters wider than one
//! column occupy their own cell plus [`Cell::CONTINUATION`] cells to the
//! right, which the presenter skips.

use bitflags::bitflags;

/// RGBA color packed into a `u32` (`0xRRGGBBAA`).
///
/// Alpha 0 means "terminal default" and is emitted as a color reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    pub const TRANSPARENT: Self = Self(0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from RGB channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 0xFF)
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn hex(rgb: u32) -> Self {
        Self((rgb << 8) | 0xFF)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }
}

bitflags! {
    /// Text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const REVERSE = 1 << 4;
    }
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub content: char,
    pub fg: PackedRgba,
    pub bg: PackedRgba,
    pub flags: StyleFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            content: ' ',
            fg: PackedRgba::TRANSPARENT,
            bg: PackedRgba::TRANSPARENT,
            flags: StyleFlags::empty(),
        }
    }
}

impl Cell {
    /// Placeholder content for the trailing columns of a wide character.
    pub const CONTINUATION: char = '\0';

    #[inline]
    pub fn from_char(content: char) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.content == Self::CONTINUATION
    }

    #[must_use]
    pub const fn with_bg(mut self, bg: PackedRgba) -> Self {
        self.bg = bg;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_channels_roundtrip() {
        let c = PackedRgba::rgb(0x0e, 0xa5, 0xe9);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x0e, 0xa5, 0xe9, 0xff));
        assert_eq!(PackedRgba::hex(0x0ea5e9), c);
    }

    #[test]
    fn transparent_default() {
        let cell = Cell::default();
        assert_eq!(cell.content, ' ');
        assert!(cell.fg.is_transparent());
        assert!(cell.bg.is_transparent());
        assert!(!cell.is_continuation());
    }
}
