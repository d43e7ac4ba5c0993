#![forbid(unsafe_code)]

//! Cell-level difference between two buffers.

use crate::buffer::Buffer;

/// Positions whose cells differ between two frames, in row-major order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferDiff {
    changes: Vec<(u16, u16)>,
}

impl BufferDiff {
    /// Compare `prev` against `next`. Buffers of different size produce a
    /// full diff of `next`.
    pub fn compute(prev: &Buffer, next: &Buffer) -> Self {
        if prev.width() != next.width() || prev.height() != next.height() {
            return Self::full(next);
        }
        let width = next.width() as usize;
        let changes = prev
            .cells()
            .iter()
            .zip(next.cells())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| ((i % width) as u16, (i / width) as u16))
            .collect();
        Self { changes }
    }

    /// Every position of `buffer`.
    pub fn full(buffer: &Buffer) -> Self {
        let changes = (0..buffer.height())
            .flat_map(|y| (0..buffer.width()).map(move |x| (x, y)))
            .collect();
        Self { changes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.changes.iter().copied()
    }
}
