//! The [`Grid`] type: a resizable 2D matrix of [`CellType`]s framed by a
//! one-cell sentinel border.
//!
//! Storage is a single owned buffer of `(width + 2) * (height + 2)` cells.
//! Public accessors take logical coordinates `(row, col)` with
//! `row in 0..width` and `col in 0..height`; they are translated to storage
//! coordinates `(row + 1, col + 1)`. The frame always holds
//! [`CellType::None`], so a neighbor lookup one step outside the interior
//! lands on a blocking sentinel instead of needing a bounds branch.
//!
//! Interior cells start out as [`Grid::DEFAULT_CELL`] (`Floor`), and cells
//! introduced by growing the grid get the same value.

use std::fmt;

use crate::brush::Brush;
use crate::cell::CellType;
use crate::events::{GridEvent, ListenerId, Listeners};
use crate::geom::{Coord, Extent};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Contract violations raised by [`Grid`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A dimension was zero or negative.
    InvalidSize { width: i32, height: i32 },
    /// The bordered buffer would exceed [`Grid::MAX_CELLS`].
    TooLarge { width: i32, height: i32 },
    /// A coordinate fell outside the addressable space.
    IndexOutOfRange { row: i32, col: i32, extent: Extent },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "grid size must be positive, got {width}x{height}")
            }
            Self::TooLarge { width, height } => write!(
                f,
                "grid size {width}x{height} needs more than {} cells",
                Grid::MAX_CELLS
            ),
            Self::IndexOutOfRange { row, col, extent } => write!(
                f,
                "cell ({row}, {col}) is outside [0, {}) x [0, {})",
                extent.width, extent.height
            ),
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// Bordered storage
// ---------------------------------------------------------------------------

/// Owned bordered buffer. Indexed with storage coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cells {
    data: Vec<CellType>,
    /// Logical extent (without the frame).
    extent: Extent,
}

impl Cells {
    /// Allocate a bordered buffer, frame set to `None`, interior to `fill`.
    fn new(extent: Extent, fill: CellType) -> Self {
        let b = extent.bordered();
        let mut data = vec![CellType::None; b.area()];
        let stride = b.height as usize;
        for r in 1..=extent.width as usize {
            let row = r * stride;
            data[row + 1..row + 1 + extent.height as usize].fill(fill);
        }
        Self { data, extent }
    }

    #[inline]
    fn stride(&self) -> usize {
        self.extent.height as usize + 2
    }

    /// Storage index of logical `p`. `p` may be at most one step outside
    /// the interior.
    #[inline]
    fn index(&self, p: Coord) -> usize {
        (p.row + 1) as usize * self.stride() + (p.col + 1) as usize
    }

    /// Whether `p` lies inside the interior or on the frame.
    #[inline]
    fn in_frame(&self, p: Coord) -> bool {
        p.row >= -1 && p.row <= self.extent.width && p.col >= -1 && p.col <= self.extent.height
    }

    #[inline]
    fn get(&self, p: Coord) -> CellType {
        self.data[self.index(p)]
    }

    /// Write `value` at interior `p`; returns whether it changed.
    #[inline]
    fn put(&mut self, p: Coord, value: CellType) -> bool {
        let i = self.index(p);
        if self.data[i] == value {
            return false;
        }
        self.data[i] = value;
        true
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// An editable grid of typed cells with a sentinel border.
///
/// Mutations that change at least one cell notify subscribers with
/// [`GridEvent::Updated`]; [`resize`](Grid::resize) notifies with
/// [`GridEvent::Resized`].
#[derive(Debug)]
pub struct Grid {
    cells: Cells,
    listeners: Listeners,
}

impl Grid {
    /// Value of interior cells that were never written.
    pub const DEFAULT_CELL: CellType = CellType::Floor;

    /// Upper bound on the bordered buffer, `(width + 2) * (height + 2)`.
    pub const MAX_CELLS: usize = 1 << 28;

    /// Validate a requested size against both the positivity rule and
    /// [`MAX_CELLS`](Self::MAX_CELLS).
    fn checked_extent(width: i32, height: i32) -> Result<Extent, GridError> {
        let extent = Extent::new(width, height);
        if !extent.is_valid() {
            return Err(GridError::InvalidSize { width, height });
        }
        let cells = (width as usize)
            .checked_add(2)
            .zip((height as usize).checked_add(2))
            .and_then(|(w, h)| w.checked_mul(h));
        match cells {
            Some(n) if n <= Self::MAX_CELLS => Ok(extent),
            _ => Err(GridError::TooLarge { width, height }),
        }
    }

    /// Create a `width` x `height` grid filled with [`DEFAULT_CELL`](Self::DEFAULT_CELL).
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        let extent = Self::checked_extent(width, height)?;
        Ok(Self {
            cells: Cells::new(extent, Self::DEFAULT_CELL),
            listeners: Listeners::new(),
        })
    }

    /// Logical size.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.cells.extent
    }

    /// Size including the sentinel frame.
    #[inline]
    pub fn bordered_extent(&self) -> Extent {
        self.cells.extent.bordered()
    }

    /// Number of rows (`row in 0..width`).
    #[inline]
    pub fn width(&self) -> i32 {
        self.cells.extent.width
    }

    /// Number of columns (`col in 0..height`).
    #[inline]
    pub fn height(&self) -> i32 {
        self.cells.extent.height
    }

    /// Whether logical `(row, col)` addresses an interior cell.
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        self.cells.extent.contains(Coord::new(row, col))
    }

    fn check(&self, row: i32, col: i32) -> Result<Coord, GridError> {
        let p = Coord::new(row, col);
        if self.cells.extent.contains(p) {
            Ok(p)
        } else {
            Err(GridError::IndexOutOfRange {
                row,
                col,
                extent: self.cells.extent,
            })
        }
    }

    /// Read the interior cell at logical `(row, col)`.
    pub fn get(&self, row: i32, col: i32) -> Result<CellType, GridError> {
        let p = self.check(row, col)?;
        Ok(self.cells.get(p))
    }

    /// Read logical `p`, treating everything outside the interior as the
    /// blocking sentinel. Never fails.
    #[inline]
    pub fn at(&self, p: Coord) -> CellType {
        if self.cells.in_frame(p) {
            self.cells.get(p)
        } else {
            CellType::None
        }
    }

    /// Read the raw bordered storage at `(row, col)`, where `(0, 0)` is the
    /// top-left sentinel and `(1, 1)` the first interior cell.
    pub fn bordered_at(&self, row: i32, col: i32) -> Result<CellType, GridError> {
        let b = self.bordered_extent();
        if !b.contains(Coord::new(row, col)) {
            return Err(GridError::IndexOutOfRange {
                row,
                col,
                extent: b,
            });
        }
        Ok(self.cells.get(Coord::new(row - 1, col - 1)))
    }

    /// Write one cell. Returns `Ok(false)` without notifying if the cell
    /// already held `value`.
    pub fn set(&mut self, row: i32, col: i32, value: CellType) -> Result<bool, GridError> {
        let p = self.check(row, col)?;
        let changed = self.cells.put(p, value);
        if changed {
            log::trace!("set {p} = {value}");
            self.listeners.emit(GridEvent::Updated);
        }
        Ok(changed)
    }

    /// Paint `value` into the square `brush` centered on `(center_row,
    /// center_col)`. Cells outside the interior are skipped, so the center
    /// itself may lie outside. Returns the number of cells changed and
    /// notifies once if that is non-zero.
    pub fn set_brush(&mut self, center_row: i32, center_col: i32, brush: Brush, value: CellType) -> usize {
        let center = Coord::new(center_row, center_col);
        let mut changed = 0;
        for p in brush.square(center, self.cells.extent) {
            if self.cells.put(p, value) {
                changed += 1;
            }
        }
        if changed > 0 {
            log::trace!(
                "brush {} at {center} = {value}: {changed} cells",
                brush.size()
            );
            self.listeners.emit(GridEvent::Updated);
        }
        changed
    }

    /// Apply a batch of `(row, col, value)` writes. Out-of-range entries are
    /// skipped. Returns the number of cells changed and notifies at most once.
    pub fn set_many<I>(&mut self, changes: I) -> usize
    where
        I: IntoIterator<Item = (i32, i32, CellType)>,
    {
        let mut changed = 0;
        let mut skipped = 0;
        for (row, col, value) in changes {
            let p = Coord::new(row, col);
            if !self.cells.extent.contains(p) {
                skipped += 1;
                continue;
            }
            if self.cells.put(p, value) {
                changed += 1;
            }
        }
        if skipped > 0 {
            log::trace!("set_many skipped {skipped} out-of-range entries");
        }
        if changed > 0 {
            self.listeners.emit(GridEvent::Updated);
        }
        changed
    }

    /// Rewrite every interior cell equal to `from` as `to`. Returns the
    /// number of cells rewritten.
    pub fn clear_type(&mut self, from: CellType, to: CellType) -> usize {
        if from == to {
            return 0;
        }
        let mut changed = 0;
        for p in self.cells.extent.iter() {
            if self.cells.get(p) == from {
                self.cells.put(p, to);
                changed += 1;
            }
        }
        if changed > 0 {
            log::trace!("cleared {changed} {from} cells to {to}");
            self.listeners.emit(GridEvent::Updated);
        }
        changed
    }

    /// First interior cell of type `value` in row-major order.
    pub fn find_first(&self, value: CellType) -> Option<Coord> {
        self.cells
            .extent
            .iter()
            .find(|&p| self.cells.get(p) == value)
    }

    /// Number of interior cells of type `value`.
    pub fn count(&self, value: CellType) -> usize {
        self.iter().filter(|&(_, c)| c == value).count()
    }

    /// Row-major iterator over interior `(Coord, CellType)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellType)> + '_ {
        self.cells.extent.iter().map(|p| (p, self.cells.get(p)))
    }

    /// Mask over the bordered grid marking the cells a brush stroke at
    /// `(center_row, center_col)` would touch. Uses the same clipping as
    /// [`set_brush`](Self::set_brush). Index of logical `(r, c)` is
    /// `(r + 1) * (height + 2) + (c + 1)`; frame entries are always `false`.
    pub fn brush_mask(&self, center_row: i32, center_col: i32, brush: Brush) -> Vec<bool> {
        let mut mask = vec![false; self.bordered_extent().area()];
        for p in brush.square(Coord::new(center_row, center_col), self.cells.extent) {
            mask[self.cells.index(p)] = true;
        }
        mask
    }

    /// Change the logical size in place.
    ///
    /// The overlapping rectangle of the old and new interiors is preserved;
    /// new cells get [`DEFAULT_CELL`](Self::DEFAULT_CELL). Returns `Ok(false)`
    /// without notifying when the size is unchanged.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<bool, GridError> {
        let extent = Self::checked_extent(width, height)?;
        if extent == self.cells.extent {
            return Ok(false);
        }
        let old = &self.cells;
        let mut next = Cells::new(extent, Self::DEFAULT_CELL);
        let keep = Extent::new(
            old.extent.width.min(extent.width),
            old.extent.height.min(extent.height),
        );
        for p in keep.iter() {
            next.put(p, old.get(p));
        }
        log::debug!("resized grid {} -> {extent}", old.extent);
        self.cells = next;
        self.listeners.emit(GridEvent::Resized {
            extent,
            bordered: extent.bordered(),
        });
        Ok(true)
    }

    /// Owned copy of the interior, unaffected by later mutations.
    pub fn snapshot(&self) -> Interior {
        Interior {
            cells: self.iter().map(|(_, c)| c).collect(),
            extent: self.cells.extent,
        }
    }

    /// Register a change listener.
    pub fn subscribe(&mut self, f: impl FnMut(&GridEvent) + 'static) -> ListenerId {
        self.listeners.add(f)
    }

    /// Remove a change listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

impl PartialEq for Grid {
    /// Grids compare by contents; listeners are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Grid {}

// ---------------------------------------------------------------------------
// Interior
// ---------------------------------------------------------------------------

/// A frozen, border-free copy of a grid's interior cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interior {
    cells: Vec<CellType>,
    extent: Extent,
}

impl Interior {
    /// Logical size.
    #[inline]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Cell at `p`, or the `None` sentinel outside the extent.
    #[inline]
    pub fn at(&self, p: Coord) -> CellType {
        if !self.extent.contains(p) {
            return CellType::None;
        }
        self.cells[p.row as usize * self.extent.height as usize + p.col as usize]
    }
}
