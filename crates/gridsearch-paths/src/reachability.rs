//! The reachability policy: which single moves a search may take.

use std::fmt;

use gridsearch_core::Coord;

/// One cell of the 3x3 neighborhood, listed in the editor's toggle-panel
/// order (top-left to bottom-right). Rows grow eastward and columns grow
/// northward in the editor's top-down view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    Center,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// Every direction in canonical order. This order is the neighbor
    /// tie-break used by every search strategy.
    pub const ALL: [Direction; 9] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::Center,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// The four orthogonal moves.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::East,
        Direction::South,
    ];

    /// The `(row, col)` offset of this move.
    pub const fn offset(self) -> Coord {
        match self {
            Direction::NorthWest => Coord::new(-1, 1),
            Direction::North => Coord::new(0, 1),
            Direction::NorthEast => Coord::new(1, 1),
            Direction::West => Coord::new(-1, 0),
            Direction::Center => Coord::new(0, 0),
            Direction::East => Coord::new(1, 0),
            Direction::SouthWest => Coord::new(-1, -1),
            Direction::South => Coord::new(0, -1),
            Direction::SouthEast => Coord::new(1, -1),
        }
    }

    /// Position in [`ALL`](Self::ALL).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction whose offset is `d`, if `d` is within the neighborhood.
    pub fn from_offset(d: Coord) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.offset() == d)
    }

    /// Whether the move changes both row and column.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let o = self.offset();
        o.row != 0 && o.col != 0
    }
}

/// A set of allowed moves.
///
/// The set is a small `Copy` value, so a search takes its own snapshot
/// simply by receiving it by value. Iteration always follows
/// [`Direction::ALL`], independent of insertion order. `Center` may be a
/// member but never produces a move.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Reachability {
    bits: u16,
}

impl Reachability {
    /// No moves at all.
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    /// Orthogonal (4-way) moves.
    pub fn cardinal() -> Self {
        Self::from_directions(Direction::CARDINAL)
    }

    /// Orthogonal and diagonal (8-way) moves.
    pub fn all() -> Self {
        let mut r = Self::from_directions(Direction::ALL);
        r.remove(Direction::Center);
        r
    }

    /// Build from any collection of directions.
    pub fn from_directions(dirs: impl IntoIterator<Item = Direction>) -> Self {
        let mut r = Self::none();
        for d in dirs {
            r.insert(d);
        }
        r
    }

    /// Build from the editor's 3x3 toggle panel, indexed like
    /// [`Direction::ALL`].
    pub fn from_mask(mask: [bool; 9]) -> Self {
        Self::from_directions(
            Direction::ALL
                .into_iter()
                .zip(mask)
                .filter_map(|(d, on)| on.then_some(d)),
        )
    }

    /// The toggle-panel view of this set.
    pub fn to_mask(self) -> [bool; 9] {
        Direction::ALL.map(|d| self.contains(d))
    }

    /// Allow `d`. Returns `false` if it was already allowed.
    pub fn insert(&mut self, d: Direction) -> bool {
        let had = self.contains(d);
        self.bits |= 1 << d.index();
        !had
    }

    /// Disallow `d`. Returns `false` if it was not allowed.
    pub fn remove(&mut self, d: Direction) -> bool {
        let had = self.contains(d);
        self.bits &= !(1 << d.index());
        had
    }

    /// Flip `d`; returns whether it is allowed afterwards.
    pub fn toggle(&mut self, d: Direction) -> bool {
        self.bits ^= 1 << d.index();
        self.contains(d)
    }

    /// Whether `d` is a member.
    #[inline]
    pub const fn contains(self, d: Direction) -> bool {
        self.bits & (1 << d.index()) != 0
    }

    /// Whether `d` is a move this policy allows. The zero offset never is.
    pub fn allows_offset(self, d: Coord) -> bool {
        d != Coord::ZERO && Direction::from_offset(d).is_some_and(|dir| self.contains(dir))
    }

    /// Members in canonical order, `Center` included if present.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// Move offsets in canonical order, excluding `Center`.
    pub fn offsets(self) -> impl Iterator<Item = Coord> {
        self.directions()
            .filter(|d| *d != Direction::Center)
            .map(Direction::offset)
    }

    /// Neighbors of `p` reachable in one move, in tie-break order.
    pub fn neighbors(self, p: Coord) -> impl Iterator<Item = Coord> {
        self.offsets().map(move |d| p + d)
    }

    /// Number of members.
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether the set is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }
}

impl fmt::Debug for Reachability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.directions()).finish()
    }
}

impl FromIterator<Direction> for Reachability {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self::from_directions(iter)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Reachability {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.directions())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Reachability {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dirs = Vec::<Direction>::deserialize(deserializer)?;
        Ok(Reachability::from_directions(dirs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_canonical_order() {
        let r = Reachability::from_directions([Direction::South, Direction::North, Direction::East]);
        let offs: Vec<Coord> = r.offsets().collect();
        assert_eq!(
            offs,
            vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(0, -1)]
        );
    }

    #[test]
    fn presets() {
        assert_eq!(Reachability::cardinal().len(), 4);
        assert_eq!(Reachability::all().len(), 8);
        assert!(!Reachability::all().contains(Direction::Center));
        assert!(Reachability::none().is_empty());
        assert!(Reachability::cardinal().offsets().all(|d| d.row == 0 || d.col == 0));
    }

    #[test]
    fn center_never_moves() {
        let mut r = Reachability::none();
        r.insert(Direction::Center);
        assert_eq!(r.len(), 1);
        assert_eq!(r.offsets().count(), 0);
        assert!(!r.allows_offset(Coord::ZERO));
    }

    #[test]
    fn mask_round_trip() {
        let mask = [true, false, false, false, false, true, false, false, true];
        let r = Reachability::from_mask(mask);
        assert_eq!(r.to_mask(), mask);
        assert!(r.contains(Direction::NorthWest));
        assert!(r.contains(Direction::East));
        assert!(r.contains(Direction::SouthEast));
    }

    #[test]
    fn insert_remove_toggle() {
        let mut r = Reachability::none();
        assert!(r.insert(Direction::West));
        assert!(!r.insert(Direction::West));
        assert!(r.allows_offset(Coord::new(-1, 0)));
        assert!(!r.toggle(Direction::West));
        assert!(!r.remove(Direction::West));
        assert!(r.toggle(Direction::NorthEast));
        assert!(r.allows_offset(Coord::new(1, 1)));
        assert!(!r.allows_offset(Coord::new(2, 0)));
    }

    #[test]
    fn direction_offsets_are_unique() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_offset(d.offset()), Some(d));
            assert_eq!(Direction::ALL[d.index()], d);
        }
        assert!(Direction::NorthWest.is_diagonal());
        assert!(!Direction::South.is_diagonal());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn reachability_round_trip() {
        let r = Reachability::cardinal();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"["North","West","East","South"]"#);
        let back: Reachability = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
