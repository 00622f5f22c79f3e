//! Path searches over a gridsearch grid.
//!
//! Every strategy shares one contract: given a read-only [`GridView`], a
//! start and an end cell, and a [`Reachability`] policy, return an
//! [`Outcome`] that is either a [`Path`] or [`Outcome::Unreachable`].
//!
//! - **BFS** shortest-move search ([`bfs`])
//! - **DFS**, recursive ([`dfs_recursive`]) and iterative ([`dfs_iterative`]),
//!   which visit cells in identical order
//! - **A\*** is a reserved selector that fails with
//!   [`SearchError::NotImplemented`]
//!
//! Pick one at runtime with [`Strategy`] and [`search`], or keep a policy
//! around in a [`Searcher`], which also times each call.
//!
//! The policy's iteration order ([`Direction::ALL`]) is the neighbor
//! tie-break for all strategies, which makes every result deterministic.

mod bfs;
mod dfs;
mod lattice;
mod path;
mod reachability;
mod search;
mod traits;

pub use bfs::bfs;
pub use dfs::{dfs_iterative, dfs_recursive};
pub use path::Path;
pub use reachability::{Direction, Reachability};
pub use search::{Outcome, SearchConfig, SearchError, SearchReport, Searcher, Strategy, search};
pub use traits::GridView;
