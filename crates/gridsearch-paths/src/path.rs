use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

use gridsearch_core::Coord;

use crate::reachability::Reachability;

/// An ordered route from start to end, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Coord>);

impl Path {
    pub(crate) fn new(cells: Vec<Coord>) -> Self {
        Self(cells)
    }

    /// Number of moves (one less than the number of cells).
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Start cell.
    #[inline]
    pub fn first(&self) -> Option<Coord> {
        self.0.first().copied()
    }

    /// End cell.
    #[inline]
    pub fn last(&self) -> Option<Coord> {
        self.0.last().copied()
    }

    /// Cells between the endpoints.
    pub fn interior(&self) -> &[Coord] {
        match self.0.len() {
            0..=2 => &[],
            n => &self.0[1..n - 1],
        }
    }

    /// Whether the path has no repeated cells and every move is allowed by
    /// `reach`.
    pub fn is_valid(&self, reach: Reachability) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        if !self.0.iter().all(|p| seen.insert(*p)) {
            return false;
        }
        self.0
            .windows(2)
            .all(|w| reach.allows_offset(w[1] - w[0]))
    }

    /// Consume into the underlying cells.
    pub fn into_vec(self) -> Vec<Coord> {
        self.0
    }
}

impl Deref for Path {
    type Target = [Coord];

    fn deref(&self) -> &[Coord] {
        &self.0
    }
}

impl IntoIterator for Path {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(cells: &[(i32, i32)]) -> Path {
        Path::new(cells.iter().map(|&c| Coord::from(c)).collect())
    }

    #[test]
    fn steps_and_endpoints() {
        let p = path(&[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert_eq!(p.first(), Some(Coord::new(0, 0)));
        assert_eq!(p.last(), Some(Coord::new(1, 1)));
        assert_eq!(p.interior(), &[Coord::new(0, 1)]);
        assert!(path(&[(0, 0)]).interior().is_empty());
    }

    #[test]
    fn validity_checks_moves_and_repeats() {
        let card = Reachability::cardinal();
        assert!(path(&[(0, 0), (0, 1), (1, 1)]).is_valid(card));
        assert!(!path(&[(0, 0), (1, 1)]).is_valid(card));
        assert!(path(&[(0, 0), (1, 1)]).is_valid(Reachability::all()));
        assert!(!path(&[(0, 0), (0, 1), (0, 0)]).is_valid(card));
        assert!(!path(&[(0, 0), (0, 2)]).is_valid(Reachability::all()));
    }

    #[test]
    fn display() {
        assert_eq!(path(&[(0, 0), (1, 0)]).to_string(), "(0, 0) -> (1, 0)");
    }
}
