//! Depth-first search, in two disciplines that visit cells in exactly the
//! same order: a recursive walk on the call stack and an iterative walk over
//! an explicit stack of frames. Neither guarantees a shortest path.

use gridsearch_core::Coord;

use crate::lattice::Lattice;
use crate::path::Path;
use crate::reachability::Reachability;
use crate::search::{Outcome, SearchError};
use crate::traits::GridView;

// ---------------------------------------------------------------------------
// Recursive
// ---------------------------------------------------------------------------

/// Stack reserved per recursion level. Several times the size of a
/// `Walk::visit` frame in unoptimized builds.
const FRAME_BYTES: usize = 1024;

/// Extra stack for the thread entry and the final path copy.
const STACK_SLACK: usize = 256 * 1024;

/// State carried down the recursion. Owns everything it reads, so it can
/// move to the walker thread.
struct Walk {
    lat: Lattice,
    offsets: Vec<Coord>,
    /// Passability per lattice index.
    open: Vec<bool>,
    target: Coord,
    visited: Vec<bool>,
    path: Vec<Coord>,
    max_depth: usize,
}

impl Walk {
    /// Enter `p` (already marked visited). Returns `Ok(true)` once the
    /// target is on `self.path`; otherwise `p` is popped before returning.
    fn visit(&mut self, p: Coord, depth: usize) -> Result<bool, SearchError> {
        if depth > self.max_depth {
            return Err(SearchError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        self.path.push(p);
        if p == self.target {
            return Ok(true);
        }
        for k in 0..self.offsets.len() {
            let np = p + self.offsets[k];
            let Some(ni) = self.lat.idx(np) else {
                continue;
            };
            if self.visited[ni] || !self.open[ni] {
                continue;
            }
            self.visited[ni] = true;
            if self.visit(np, depth + 1)? {
                return Ok(true);
            }
        }
        self.path.pop();
        Ok(false)
    }
}

/// Stack needed to recurse `levels` deep.
fn stack_bytes(levels: usize) -> usize {
    levels
        .saturating_add(1)
        .saturating_mul(FRAME_BYTES)
        .saturating_add(STACK_SLACK)
}

/// Recursive depth-first search.
///
/// Recursion depth equals the length of the in-progress path; exceeding
/// `max_depth` fails with [`SearchError::DepthExceeded`]. The walk runs on a
/// dedicated thread whose stack is sized for the smaller of `max_depth` and
/// the number of cells, so deep walks never depend on the caller's stack.
pub fn dfs_recursive<V: GridView + ?Sized>(
    view: &V,
    reach: Reachability,
    start: Coord,
    end: Coord,
    max_depth: usize,
) -> Result<Outcome, SearchError> {
    let lat = Lattice::new(view.extent());
    let (Some(si), Some(_)) = (lat.idx(start), lat.idx(end)) else {
        return Ok(Outcome::Unreachable);
    };
    let mut walk = Walk {
        lat,
        offsets: reach.offsets().collect(),
        open: (0..lat.len()).map(|i| view.passable(lat.point(i))).collect(),
        target: end,
        visited: vec![false; lat.len()],
        path: Vec::new(),
        max_depth,
    };
    walk.visited[si] = true;

    // A path never repeats a cell, so the depth is also bounded by the area.
    let bytes = stack_bytes(max_depth.min(lat.len()));
    let found = std::thread::scope(|s| {
        let handle = std::thread::Builder::new()
            .name("dfs-recursive".into())
            .stack_size(bytes)
            .spawn_scoped(s, || walk.visit(start, 0))
            .map_err(|e| {
                log::warn!("cannot reserve {bytes} bytes of stack: {e}");
                SearchError::StackUnavailable { bytes }
            })?;
        match handle.join() {
            Ok(r) => r,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    })?;
    if found {
        Ok(Outcome::Found(Path::new(walk.path)))
    } else {
        Ok(Outcome::Unreachable)
    }
}

// ---------------------------------------------------------------------------
// Iterative
// ---------------------------------------------------------------------------

/// One simulated call of the recursive walk.
struct Frame {
    pos: Coord,
    /// Next offset to try.
    next: usize,
}

/// Iterative depth-first search.
///
/// Produces the same path as [`dfs_recursive`] for the same inputs, without
/// any depth bound.
pub fn dfs_iterative<V: GridView + ?Sized>(
    view: &V,
    reach: Reachability,
    start: Coord,
    end: Coord,
) -> Outcome {
    let lat = Lattice::new(view.extent());
    let (Some(si), Some(_)) = (lat.idx(start), lat.idx(end)) else {
        return Outcome::Unreachable;
    };
    if start == end {
        return Outcome::Found(Path::new(vec![start]));
    }

    let offsets: Vec<Coord> = reach.offsets().collect();
    let mut visited = vec![false; lat.len()];
    let mut stack = vec![Frame { pos: start, next: 0 }];
    visited[si] = true;

    while let Some(top) = stack.last_mut() {
        let Some(&d) = offsets.get(top.next) else {
            // exhausted: backtrack
            stack.pop();
            continue;
        };
        top.next += 1;
        let np = top.pos + d;
        let Some(ni) = lat.idx(np) else {
            continue;
        };
        if visited[ni] || !view.passable(np) {
            continue;
        }
        visited[ni] = true;
        if np == end {
            let mut cells: Vec<Coord> = stack.iter().map(|f| f.pos).collect();
            cells.push(np);
            return Outcome::Found(Path::new(cells));
        }
        stack.push(Frame { pos: np, next: 0 });
    }
    Outcome::Unreachable
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_core::{Grid, Layout};

    const DEPTH: usize = 1 << 12;

    fn both<V: GridView + ?Sized>(view: &V, reach: Reachability, start: Coord, end: Coord) -> Outcome {
        let rec = dfs_recursive(view, reach, start, end, DEPTH).unwrap();
        let it = dfs_iterative(view, reach, start, end);
        assert_eq!(rec, it);
        rec
    }

    #[test]
    fn open_grid_finds_valid_path() {
        let g = Grid::new(5, 5).unwrap();
        let reach = Reachability::cardinal();
        let path = both(&g, reach, Coord::new(0, 0), Coord::new(4, 4))
            .into_path()
            .unwrap();
        assert_eq!(path.first(), Some(Coord::new(0, 0)));
        assert_eq!(path.last(), Some(Coord::new(4, 4)));
        assert!(path.is_valid(reach));
        assert!(path.steps() >= 8);
    }

    #[test]
    fn follows_tie_break_order() {
        // North (col + 1) is tried before East (row + 1).
        let g = Grid::new(3, 3).unwrap();
        let path = both(&g, Reachability::cardinal(), Coord::new(0, 0), Coord::new(2, 2))
            .into_path()
            .unwrap();
        assert_eq!(
            path.into_vec(),
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 2),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn backtracks_out_of_dead_end() {
        let l = Layout::new(
            "
            ..#
            .##
            ...",
        )
        .unwrap();
        let reach = Reachability::cardinal();
        let path = both(&l, reach, Coord::new(0, 0), Coord::new(2, 2))
            .into_path()
            .unwrap();
        assert!(!path.contains(&Coord::new(0, 1)));
        assert!(path.is_valid(reach));
        assert_eq!(path.steps(), 4);
    }

    #[test]
    fn blocked_middle_row_is_unreachable() {
        let l = Layout::new("...\n###\n...").unwrap();
        let out = both(&l, Reachability::cardinal(), Coord::new(0, 0), Coord::new(2, 0));
        assert_eq!(out, Outcome::Unreachable);
    }

    #[test]
    fn start_equals_end() {
        let g = Grid::new(2, 2).unwrap();
        let out = both(&g, Reachability::cardinal(), Coord::new(1, 0), Coord::new(1, 0));
        assert_eq!(out.into_path().unwrap().len(), 1);
    }

    #[test]
    fn blocked_end_is_unreachable() {
        let l = Layout::new(".#").unwrap();
        let out = both(&l, Reachability::all(), Coord::new(0, 0), Coord::new(0, 1));
        assert_eq!(out, Outcome::Unreachable);
    }

    #[test]
    fn recursion_limit() {
        let g = Grid::new(1, 10).unwrap();
        let err = dfs_recursive(&g, Reachability::cardinal(), Coord::new(0, 0), Coord::new(0, 9), 3)
            .unwrap_err();
        assert_eq!(err, SearchError::DepthExceeded { limit: 3 });
        let ok = dfs_recursive(&g, Reachability::cardinal(), Coord::new(0, 0), Coord::new(0, 9), 9);
        assert_eq!(ok.unwrap().into_path().unwrap().steps(), 9);
    }

    #[test]
    fn deep_walk_matches_iterative_on_large_grid() {
        // The snake through every cell of a 100x100 grid is far deeper than
        // a test thread's own stack allows.
        let g = Grid::new(100, 100).unwrap();
        let (start, end) = (Coord::new(0, 0), Coord::new(1, 0));
        let depth = crate::SearchConfig::default().max_recursion_depth;
        let rec = dfs_recursive(&g, Reachability::cardinal(), start, end, depth).unwrap();
        let it = dfs_iterative(&g, Reachability::cardinal(), start, end);
        assert_eq!(rec, it);
        assert_eq!(rec.path().map(|p| p.len()), Some(100 * 100));
    }

    #[test]
    fn stack_grows_with_depth() {
        assert!(stack_bytes(10_000) > 10_000 * FRAME_BYTES);
        assert_eq!(stack_bytes(usize::MAX), usize::MAX);
    }
}
