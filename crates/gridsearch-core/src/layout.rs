//! Grids described as ASCII art.
//!
//! A [`Layout`] parses a block of text, one line per row, into cell types
//! using a fixed alphabet:
//!
//! | char | cell |
//! |---|---|
//! | `.` | `Floor` |
//! | `#` | `Block` |
//! | `S` | `Start` |
//! | `E` | `End` |
//! | `*` | `Path1` |
//! | `+` | `Path2` |
//!
//! [`render`] prints a grid back with the same alphabet.

use std::fmt;

use crate::cell::CellType;
use crate::geom::{Coord, Extent};
use crate::grid::{Grid, GridError};

/// Character used for `t` by [`Layout`] and [`render`].
pub const fn rune(t: CellType) -> char {
    match t {
        CellType::None => ' ',
        CellType::Floor => '.',
        CellType::Block => '#',
        CellType::Start => 'S',
        CellType::End => 'E',
        CellType::Path1 => '*',
        CellType::Path2 => '+',
    }
}

/// Inverse of [`rune`]. The sentinel has no character.
pub const fn from_rune(ch: char) -> Option<CellType> {
    match ch {
        '.' => Some(CellType::Floor),
        '#' => Some(CellType::Block),
        'S' => Some(CellType::Start),
        'E' => Some(CellType::End),
        '*' => Some(CellType::Path1),
        '+' => Some(CellType::Path2),
        _ => None,
    }
}

/// A parsed ASCII grid description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    rows: Vec<Vec<CellType>>,
    extent: Extent,
}

impl Layout {
    /// Parse `s`. Surrounding whitespace of the whole block and of each line
    /// is ignored; every line must then have the same length.
    pub fn new(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let mut rows: Vec<Vec<CellType>> = Vec::new();
        for (r, line) in s.lines().enumerate() {
            let line = line.trim();
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let Some(t) = from_rune(ch) else {
                    return Err(LayoutError::InvalidRune {
                        ch,
                        pos: Coord::new(r as i32, c as i32),
                    });
                };
                row.push(t);
            }
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(LayoutError::InconsistentSize {
                        row: r as i32,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }
        let width = rows.len() as i32;
        let height = rows.first().map_or(0, |r| r.len()) as i32;
        let extent = Extent::new(width, height);
        if !extent.is_valid() {
            return Err(LayoutError::Empty);
        }
        Ok(Self { rows, extent })
    }

    /// Size of the described grid.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Cell at `p`, `None` outside the layout.
    pub fn at(&self, p: Coord) -> Option<CellType> {
        if !self.extent.contains(p) {
            return None;
        }
        Some(self.rows[p.row as usize][p.col as usize])
    }

    /// Row-major iterator over `(Coord, CellType)`.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellType)> + '_ {
        self.extent
            .iter()
            .map(|p| (p, self.rows[p.row as usize][p.col as usize]))
    }

    /// Build a fresh grid holding this layout.
    pub fn to_grid(&self) -> Result<Grid, GridError> {
        let mut g = Grid::new(self.extent.width, self.extent.height)?;
        self.draw(&mut g);
        Ok(g)
    }

    /// Copy this layout into `grid` starting at its origin. Cells that do
    /// not fit are skipped. Returns the number of cells changed.
    pub fn draw(&self, grid: &mut Grid) -> usize {
        grid.set_many(self.iter().map(|(p, t)| (p.row, p.col, t)))
    }
}

/// Print the interior of `grid`, one line per row.
pub fn render(grid: &Grid) -> String {
    let e = grid.extent();
    let mut out = String::with_capacity((e.height as usize + 1) * e.width as usize);
    for row in 0..e.width {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..e.height {
            out.push(rune(grid.at(Coord::new(row, col))));
        }
    }
    out
}

/// Errors produced while parsing a [`Layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No rows, or rows with no cells.
    Empty,
    /// A row's length differs from the first row's.
    InconsistentSize {
        row: i32,
        expected: usize,
        found: usize,
    },
    /// A character outside the layout alphabet.
    InvalidRune { ch: char, pos: Coord },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("layout is empty"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
