#![forbid(unsafe_code)]

//! Styles: optional colors plus attribute flags, applied on top of a cell.

use crate::cell::{Cell, PackedRgba, StyleFlags};

/// A partial cell style. Unset colors leave the cell's color unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<PackedRgba>,
    pub bg: Option<PackedRgba>,
    pub flags: StyleFlags,
}

impl Style {
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            flags: StyleFlags::empty(),
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.flags = self.flags.union(StyleFlags::BOLD);
        self
    }

    /// Layer `other` over `self`: its set colors win, flags are combined.
    #[must_use]
    pub fn patch(self, other: Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            flags: self.flags | other.flags,
        }
    }

    /// Write this style into a cell.
    #[inline]
    pub fn apply(&self, cell: &mut Cell) {
        if let Some(fg) = self.fg {
            cell.fg = fg;
        }
        if let Some(bg) = self.bg {
            cell.bg = bg;
        }
        cell.flags |= self.flags;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_prefers_overlay_colors() {
        let base = Style::new().fg(PackedRgba::BLACK).bg(PackedRgba::WHITE);
        let over = Style::new().fg(PackedRgba::hex(0xb45309)).bold();
        let merged = base.patch(over);
        assert_eq!(merged.fg, Some(PackedRgba::hex(0xb45309)));
        assert_eq!(merged.bg, Some(PackedRgba::WHITE));
        assert!(merged.flags.contains(StyleFlags::BOLD));
    }

    #[test]
    fn apply_keeps_unset_colors() {
        let mut cell = Cell::from_char('x').with_bg(PackedRgba::WHITE);
        Style::new().fg(PackedRgba::BLACK).apply(&mut cell);
        assert_eq!(cell.fg, PackedRgba::BLACK);
        assert_eq!(cell.bg, PackedRgba::WHITE);
    }
}
