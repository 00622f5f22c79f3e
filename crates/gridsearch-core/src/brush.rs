//! Square brush geometry shared by painting and highlighting.

use crate::geom::{Coord, Extent};

/// A centered square brush with an odd side length.
///
/// The editor derives the side from a layer count as `2 * layers - 1`, so a
/// one-layer brush touches a single cell and a three-layer brush a 5x5 block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Brush {
    size: i32,
}

impl Brush {
    /// A brush touching exactly one cell.
    pub const SINGLE: Brush = Brush { size: 1 };

    /// Brush with the given side length. Even sizes cover the same square as
    /// the next smaller odd size; non-positive sizes touch nothing.
    #[inline]
    pub const fn new(size: i32) -> Self {
        Self { size }
    }

    /// Brush with `layers` concentric rings (`layers >= 1`).
    #[inline]
    pub const fn from_layers(layers: i32) -> Self {
        Self {
            size: layers.saturating_mul(2).saturating_sub(1),
        }
    }

    /// Side length.
    #[inline]
    pub const fn size(self) -> i32 {
        self.size
    }

    /// Distance from the center to the edge of the square.
    #[inline]
    pub const fn half(self) -> i32 {
        self.size / 2
    }

    /// Cells of the square around `center` that lie inside `extent`,
    /// in row-major order.
    ///
    /// Only the clipped rectangle is walked, so the cost is bounded by the
    /// extent's area whatever the brush size or center.
    pub fn square(self, center: Coord, extent: Extent) -> impl Iterator<Item = Coord> {
        let (rows, cols) = if self.size > 0 {
            (
                self.span(center.row, extent.width),
                self.span(center.col, extent.height),
            )
        } else {
            ((0, -1), (0, -1))
        };
        (rows.0..=rows.1).flat_map(move |row| (cols.0..=cols.1).map(move |col| Coord::new(row, col)))
    }

    /// Inclusive range `center +- half` clipped to `0..len`. Empty when
    /// `lo > hi`.
    fn span(self, center: i32, len: i32) -> (i32, i32) {
        let half = self.half();
        let lo = center.saturating_sub(half).max(0);
        let hi = center.saturating_add(half).min(len.saturating_sub(1));
        (lo, hi)
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::SINGLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_to_size() {
        assert_eq!(Brush::from_layers(1).size(), 1);
        assert_eq!(Brush::from_layers(3).size(), 5);
        assert_eq!(Brush::from_layers(3).half(), 2);
    }

    #[test]
    fn square_in_middle() {
        let cells: Vec<Coord> = Brush::new(3)
            .square(Coord::new(2, 2), Extent::new(5, 5))
            .collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], Coord::new(1, 1));
        assert_eq!(cells[8], Coord::new(3, 3));
    }

    #[test]
    fn square_clips_at_corner() {
        let cells: Vec<Coord> = Brush::new(3)
            .square(Coord::new(0, 0), Extent::new(5, 5))
            .collect();
        assert_eq!(
            cells,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    fn center_outside_still_clips() {
        let n = Brush::new(5)
            .square(Coord::new(-1, -1), Extent::new(4, 4))
            .count();
        assert_eq!(n, 4);
        assert_eq!(Brush::new(0).square(Coord::ZERO, Extent::new(4, 4)).count(), 0);
    }

    #[test]
    fn far_centers_touch_nothing() {
        let e = Extent::new(5, 5);
        for center in [
            Coord::new(i32::MAX, 0),
            Coord::new(0, i32::MIN),
            Coord::new(i32::MIN, i32::MAX),
        ] {
            assert_eq!(Brush::new(3).square(center, e).count(), 0);
        }
        assert_eq!(Brush::new(i32::MAX).square(Coord::new(2, -1_000_000_000), e).count(), 25);
        assert_eq!(Brush::from_layers(i32::MAX).size(), i32::MAX - 1);
    }

    #[test]
    fn huge_brush_covers_extent_once() {
        let cells: Vec<Coord> = Brush::new(20_001).square(Coord::ZERO, Extent::new(5, 4)).collect();
        assert_eq!(cells, Extent::new(5, 4).iter().collect::<Vec<_>>());
    }
}
