use gridsearch_core::{CellType, Coord, Extent, Grid, Interior, Layout};

/// Read-only view of a grid's interior cells, addressed with the same
/// logical coordinates as search endpoints.
pub trait GridView {
    /// Logical size of the interior.
    fn extent(&self) -> Extent;

    /// Cell at `p`. Coordinates outside the interior must read as the
    /// blocking [`CellType::None`] sentinel.
    fn cell(&self, p: Coord) -> CellType;

    /// Whether a search may step onto `p`.
    #[inline]
    fn passable(&self, p: Coord) -> bool {
        self.cell(p).is_traversable()
    }
}

impl GridView for Grid {
    #[inline]
    fn extent(&self) -> Extent {
        Grid::extent(self)
    }

    #[inline]
    fn cell(&self, p: Coord) -> CellType {
        self.at(p)
    }
}

impl GridView for Interior {
    #[inline]
    fn extent(&self) -> Extent {
        Interior::extent(self)
    }

    #[inline]
    fn cell(&self, p: Coord) -> CellType {
        self.at(p)
    }
}

impl GridView for Layout {
    #[inline]
    fn extent(&self) -> Extent {
        Layout::extent(self)
    }

    #[inline]
    fn cell(&self, p: Coord) -> CellType {
        self.at(p).unwrap_or(CellType::None)
    }
}

impl<V: GridView + ?Sized> GridView for &V {
    #[inline]
    fn extent(&self) -> Extent {
        (**self).extent()
    }

    #[inline]
    fn cell(&self, p: Coord) -> CellType {
        (**self).cell(p)
    }
}
