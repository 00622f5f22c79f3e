//! The [`CellType`] tag stored in every grid cell.

use std::fmt;

/// The type painted into a grid cell.
///
/// `None` is the sentinel used for the border frame and is never assigned
/// by the editor. The numeric discriminants are stable for renderers that
/// upload the grid as integers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum CellType {
    #[default]
    None = -1,
    Floor = 0,
    Block = 1,
    Start = 2,
    End = 3,
    Path1 = 4,
    Path2 = 5,
}

impl CellType {
    /// Every variant, sentinel first.
    pub const ALL: [CellType; 7] = [
        CellType::None,
        CellType::Floor,
        CellType::Block,
        CellType::Start,
        CellType::End,
        CellType::Path1,
        CellType::Path2,
    ];

    /// Whether a search may step onto a cell of this type.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !self.is_blocking()
    }

    /// `Block` and the `None` sentinel stop movement.
    #[inline]
    pub const fn is_blocking(self) -> bool {
        matches!(self, CellType::Block | CellType::None)
    }

    /// Whether the type is one of the path overlays.
    #[inline]
    pub const fn is_path(self) -> bool {
        matches!(self, CellType::Path1 | CellType::Path2)
    }

    /// The integer identity used by renderers.
    #[inline]
    pub const fn id(self) -> i32 {
        self as i8 as i32
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellType::None => "none",
            CellType::Floor => "floor",
            CellType::Block => "block",
            CellType::Start => "start",
            CellType::End => "end",
            CellType::Path1 => "path1",
            CellType::Path2 => "path2",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_partition_all_types() {
        for t in CellType::ALL {
            assert_ne!(t.is_traversable(), t.is_blocking(), "{t}");
        }
        assert!(CellType::Start.is_traversable());
        assert!(CellType::Path2.is_traversable());
        assert!(CellType::None.is_blocking());
        assert!(CellType::Block.is_blocking());
    }

    #[test]
    fn ids_are_stable_and_distinct() {
        let ids: Vec<i32> = CellType::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![-1, 0, 1, 2, 3, 4, 5]);
    }
}
