use gridsearch_core::{Coord, Extent};

/// Flat indexing of an interior extent, used for per-search scratch arrays.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Lattice {
    extent: Extent,
}

impl Lattice {
    pub(crate) fn new(extent: Extent) -> Self {
        Self { extent }
    }

    /// Number of cells.
    #[inline]
    pub(crate) fn len(self) -> usize {
        self.extent.area()
    }

    /// Convert a `Coord` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(self, p: Coord) -> Option<usize> {
        if !self.extent.contains(p) {
            return None;
        }
        Some(p.row as usize * self.extent.height as usize + p.col as usize)
    }

    /// Convert a flat index back to a `Coord`.
    #[inline]
    pub(crate) fn point(self, i: usize) -> Coord {
        let h = self.extent.height as usize;
        Coord::new((i / h) as i32, (i % h) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_point_inverse() {
        let l = Lattice::new(Extent::new(3, 5));
        assert_eq!(l.len(), 15);
        for i in 0..l.len() {
            assert_eq!(l.idx(l.point(i)), Some(i));
        }
        assert_eq!(l.idx(Coord::new(3, 0)), None);
        assert_eq!(l.idx(Coord::new(0, -1)), None);
    }
}
