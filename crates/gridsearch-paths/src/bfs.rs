use std::collections::VecDeque;

use gridsearch_core::Coord;

use crate::lattice::Lattice;
use crate::path::Path;
use crate::reachability::Reachability;
use crate::search::Outcome;
use crate::traits::GridView;

const NO_PARENT: usize = usize::MAX;

/// Breadth-first search from `start` to `end`.
///
/// Every move costs one step, so the returned path has the fewest moves of
/// any path allowed by `reach`. Each cell is enqueued at most once; its
/// parent is recorded at enqueue time and replayed from `end` to rebuild the
/// route. Both endpoints must be inside the view.
pub fn bfs<V: GridView + ?Sized>(view: &V, reach: Reachability, start: Coord, end: Coord) -> Outcome {
    let lat = Lattice::new(view.extent());
    let (Some(si), Some(ei)) = (lat.idx(start), lat.idx(end)) else {
        return Outcome::Unreachable;
    };

    let mut parent = vec![NO_PARENT; lat.len()];
    let mut visited = vec![false; lat.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[si] = true;
    queue.push_back(si);

    let mut found = false;
    while let Some(ci) = queue.pop_front() {
        if ci == ei {
            found = true;
            break;
        }
        let cp = lat.point(ci);
        for np in reach.neighbors(cp) {
            let Some(ni) = lat.idx(np) else {
                continue;
            };
            if visited[ni] || !view.passable(np) {
                continue;
            }
            visited[ni] = true;
            parent[ni] = ci;
            queue.push_back(ni);
        }
    }

    if !found {
        return Outcome::Unreachable;
    }

    let mut cells = Vec::new();
    let mut ci = ei;
    while ci != NO_PARENT {
        cells.push(lat.point(ci));
        ci = parent[ci];
    }
    cells.reverse();
    Outcome::Found(Path::new(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_core::{Grid, Layout};

    #[test]
    fn open_grid_shortest_cardinal() {
        let g = Grid::new(5, 5).unwrap();
        let path = bfs(&g, Reachability::cardinal(), Coord::new(0, 0), Coord::new(4, 4))
            .into_path()
            .unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.first(), Some(Coord::new(0, 0)));
        assert_eq!(path.last(), Some(Coord::new(4, 4)));
        assert!(path.is_valid(Reachability::cardinal()));
    }

    #[test]
    fn open_grid_shortest_diagonal() {
        let g = Grid::new(5, 5).unwrap();
        let path = bfs(&g, Reachability::all(), Coord::new(0, 0), Coord::new(4, 4))
            .into_path()
            .unwrap();
        assert_eq!(path.steps(), 4);
    }

    #[test]
    fn detours_around_wall() {
        let l = Layout::new(
            "
            S.#..
            ..#..
            ..#..
            .....
            ....E",
        )
        .unwrap();
        let path = bfs(&l, Reachability::cardinal(), Coord::new(0, 0), Coord::new(4, 4))
            .into_path()
            .unwrap();
        assert_eq!(path.steps(), 8);
        for p in path.iter() {
            assert!(l.at(*p).unwrap().is_traversable());
        }
    }

    #[test]
    fn blocked_middle_row_is_unreachable() {
        let l = Layout::new("...\n###\n...").unwrap();
        let out = bfs(&l, Reachability::cardinal(), Coord::new(0, 0), Coord::new(2, 0));
        assert_eq!(out, Outcome::Unreachable);
        // Diagonals cannot squeeze through a full row either.
        let out = bfs(&l, Reachability::all(), Coord::new(0, 0), Coord::new(2, 0));
        assert_eq!(out, Outcome::Unreachable);
    }

    #[test]
    fn blocked_end_is_unreachable() {
        let l = Layout::new("..#").unwrap();
        let out = bfs(&l, Reachability::cardinal(), Coord::new(0, 0), Coord::new(0, 2));
        assert_eq!(out, Outcome::Unreachable);
    }

    #[test]
    fn blocked_start_still_leaves() {
        let l = Layout::new("#..").unwrap();
        let path = bfs(&l, Reachability::cardinal(), Coord::new(0, 0), Coord::new(0, 2))
            .into_path()
            .unwrap();
        assert_eq!(path.steps(), 2);
    }

    #[test]
    fn start_equals_end() {
        let g = Grid::new(2, 2).unwrap();
        let path = bfs(&g, Reachability::none(), Coord::new(1, 1), Coord::new(1, 1))
            .into_path()
            .unwrap();
        assert_eq!(path.into_vec(), vec![Coord::new(1, 1)]);
    }

    #[test]
    fn empty_policy_cannot_move() {
        let g = Grid::new(2, 2).unwrap();
        let out = bfs(&g, Reachability::none(), Coord::new(0, 0), Coord::new(0, 1));
        assert_eq!(out, Outcome::Unreachable);
    }
}
