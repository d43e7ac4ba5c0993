#![forbid(unsafe_code)]

//! Rectangles in cell coordinates.

/// An axis-aligned rectangle. The right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by `h` cells on the left and right and `v` cells on top and bottom.
    #[must_use]
    pub const fn inset(&self, h: u16, v: u16) -> Self {
        let width = self.width.saturating_sub(h.saturating_mul(2));
        let height = self.height.saturating_sub(v.saturating_mul(2));
        Self::new(
            self.x.saturating_add(h),
            self.y.saturating_add(v),
            width,
            height,
        )
    }

    /// The overlap of two rectangles (empty if they do not overlap).
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return Rect::new(x, y, 0, 0);
        }
        Rect::new(x, y, right - x, bottom - y)
    }

    /// One row of this rectangle, `offset` rows down. Empty when out of range.
    #[must_use]
    pub const fn row(&self, offset: u16) -> Rect {
        if offset >= self.height {
            return Rect::new(self.x, self.bottom(), self.width, 0);
        }
        Rect::new(self.x, self.y.saturating_add(offset), self.width, 1)
    }

    /// Split off the top `rows` rows: `(top, rest)`.
    #[must_use]
    pub const fn split_top(&self, rows: u16) -> (Rect, Rect) {
        let rows = if rows > self.height {
            self.height
        } else {
            rows
        };
        (
            Rect::new(self.x, self.y, self.width, rows),
            Rect::new(self.x, self.y.saturating_add(rows), self.width, self.height - rows),
        )
    }

    /// Split off the bottom `rows` rows: `(rest, bottom)`.
    #[must_use]
    pub const fn split_bottom(&self, rows: u16) -> (Rect, Rect) {
        let rows = if rows > self.height {
            self.height
        } else {
            rows
        };
        let rest = self.height - rows;
        (
            Rect::new(self.x, self.y, self.width, rest),
            Rect::new(self.x, self.y.saturating_add(rest), self.width, rows),
        )
    }

    /// Divide into `n` side-by-side columns of near-equal width.
    ///
    /// Leftover cells go to the leftmost columns. `n == 0` yields nothing.
    #[must_use]
    pub fn columns(&self, n: u16) -> Vec<Rect> {
        if n == 0 {
            return Vec::new();
        }
        let base = self.width / n;
        let extra = self.width % n;
        let mut x = self.x;
        (0..n)
            .map(|i| {
                let w = base + u16::from(i < extra);
                let col = Rect::new(x, self.y, w, self.height);
                x = x.saturating_add(w);
                col
            })
            .collect()
    }
}
