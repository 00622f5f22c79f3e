//! Geometry primitives: [`Coord`] and [`Extent`].
//!
//! A `Coord` addresses a cell by `(row, col)` in the logical (unshifted)
//! coordinate space and doubles as a relative offset for neighbor moves.

use std::fmt;
use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell address or a relative move, in `(row, col)` order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by `(dr, dc)`.
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Chebyshev distance to `other`.
    #[inline]
    pub fn chebyshev(self, other: Coord) -> i32 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Neg for Coord {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.row, -self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Extent
// ---------------------------------------------------------------------------

/// A logical grid size. Row indexes run over `0..width`, column indexes
/// over `0..height`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    /// Create a new extent.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The extent including the one-cell sentinel frame on every side.
    /// Saturates at `i32::MAX`.
    #[inline]
    pub const fn bordered(self) -> Self {
        Self {
            width: self.width.saturating_add(2),
            height: self.height.saturating_add(2),
        }
    }

    /// Whether both dimensions are strictly positive.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Number of cells covered (zero for invalid extents).
    #[inline]
    pub fn area(self) -> usize {
        if !self.is_valid() {
            return 0;
        }
        self.width as usize * self.height as usize
    }

    /// Whether `p` lies in `[0, width) x [0, height)`.
    #[inline]
    pub const fn contains(self, p: Coord) -> bool {
        p.row >= 0 && p.row < self.width && p.col >= 0 && p.col < self.height
    }

    /// Row-major iterator over every coordinate in the extent.
    #[inline]
    pub fn iter(self) -> ExtentIter {
        ExtentIter {
            extent: self,
            cur: Coord::ZERO,
        }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl IntoIterator for Extent {
    type Item = Coord;
    type IntoIter = ExtentIter;
    #[inline]
    fn into_iter(self) -> ExtentIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// ExtentIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates of an [`Extent`].
#[derive(Clone, Debug)]
pub struct ExtentIter {
    extent: Extent,
    cur: Coord,
}

impl Iterator for ExtentIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if !self.extent.is_valid() || self.cur.row >= self.extent.width {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.extent.height {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if !self.extent.is_valid() || self.cur.row >= self.extent.width {
            return (0, Some(0));
        }
        let h = self.extent.height as usize;
        let remaining_in_row = (self.extent.height - self.cur.col) as usize;
        let remaining_rows = (self.extent.width - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * h;
        (total, Some(total))
    }
}

impl ExactSizeIterator for ExtentIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
        assert_eq!(-a, Coord::new(-1, -2));
        assert_eq!(a.shift(-1, 1), Coord::new(0, 3));
        assert_eq!(a.chebyshev(b), 2);
    }

    #[test]
    fn extent_contains() {
        let e = Extent::new(3, 2);
        assert!(e.contains(Coord::new(0, 0)));
        assert!(e.contains(Coord::new(2, 1)));
        assert!(!e.contains(Coord::new(3, 0)));
        assert!(!e.contains(Coord::new(0, 2)));
        assert!(!e.contains(Coord::new(-1, 0)));
        assert_eq!(e.bordered(), Extent::new(5, 4));
    }

    #[test]
    fn extent_iter_is_row_major() {
        let e = Extent::new(2, 3);
        let pts: Vec<Coord> = e.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Coord::new(0, 0));
        assert_eq!(pts[1], Coord::new(0, 1));
        assert_eq!(pts[3], Coord::new(1, 0));
        assert_eq!(e.iter().len(), 6);
    }

    #[test]
    fn invalid_extent_is_empty() {
        let e = Extent::new(0, 4);
        assert!(!e.is_valid());
        assert_eq!(e.area(), 0);
        assert_eq!(e.iter().count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_json_round_trip() {
        let c = Coord::new(-1, 7);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
