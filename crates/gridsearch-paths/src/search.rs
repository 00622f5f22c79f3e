//! Strategy dispatch: one entry point over every search algorithm.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use gridsearch_core::{Coord, Extent};

use crate::bfs::bfs;
use crate::dfs::{dfs_iterative, dfs_recursive};
use crate::path::Path;
use crate::reachability::Reachability;
use crate::traits::GridView;

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Selects the algorithm used by [`search`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first; returns a path with the fewest moves.
    #[default]
    Bfs,
    /// Depth-first on the call stack.
    DfsRecursive,
    /// Depth-first over an explicit stack; same result as `DfsRecursive`.
    DfsIterative,
    /// Declared but not built; always fails with
    /// [`SearchError::NotImplemented`].
    AStar,
}

impl Strategy {
    /// Every strategy, in selector order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::DfsRecursive,
        Strategy::DfsIterative,
        Strategy::AStar,
    ];

    /// Short name, accepted back by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::DfsRecursive => "dfs-recursive",
            Strategy::DfsIterative => "dfs-iterative",
            Strategy::AStar => "astar",
        }
    }

    /// Whether the strategy can actually run.
    pub const fn is_implemented(self) -> bool {
        !matches!(self, Strategy::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Strategy::ALL
            .into_iter()
            .find(|st| st.name() == key)
            .ok_or_else(|| SearchError::UnknownStrategy(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Outcome / errors
// ---------------------------------------------------------------------------

/// Result of a search that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A route from start to end, both inclusive.
    Found(Path),
    /// No route exists under the grid and reachability policy.
    Unreachable,
}

impl Outcome {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    /// The found path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Outcome::Found(p) => Some(p),
            Outcome::Unreachable => None,
        }
    }

    /// Consume into the found path, if any.
    pub fn into_path(self) -> Option<Path> {
        match self {
            Outcome::Found(p) => Some(p),
            Outcome::Unreachable => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found(p) => write!(f, "path of {} steps", p.steps()),
            Outcome::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Reasons a search could not run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The strategy is declared but has no implementation.
    NotImplemented(Strategy),
    /// An endpoint lies outside the view.
    OutOfRange { point: Coord, extent: Extent },
    /// The recursive walk went deeper than allowed.
    DepthExceeded { limit: usize },
    /// The walker thread for the recursive search could not get its stack.
    StackUnavailable { bytes: usize },
    /// A strategy name did not match any [`Strategy`].
    UnknownStrategy(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented(s) => write!(f, "search strategy {s} is not implemented"),
            Self::OutOfRange { point, extent } => {
                write!(f, "endpoint {point} is outside the {extent} grid")
            }
            Self::DepthExceeded { limit } => {
                write!(f, "recursive search exceeded depth limit {limit}")
            }
            Self::StackUnavailable { bytes } => {
                write!(f, "cannot reserve {bytes} bytes of stack for recursive search")
            }
            Self::UnknownStrategy(s) => write!(f, "unknown search strategy \u{201c}{s}\u{201d}"),
        }
    }
}

impl std::error::Error for SearchError {}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Tunables shared by all strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Deepest call chain the recursive DFS may build. The default covers
    /// every cell of a 128x128 grid.
    pub max_recursion_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: 16_384,
        }
    }
}

/// Find a path from `start` to `end` over `view` with `strategy`.
///
/// `reach` is taken by value, so later changes to the caller's policy never
/// affect a search in progress. Endpoints must lie inside the view; they are
/// not required to be traversable themselves. For fixed inputs the result is
/// deterministic.
pub fn search<V: GridView + ?Sized>(
    strategy: Strategy,
    start: Coord,
    end: Coord,
    view: &V,
    reach: Reachability,
    config: &SearchConfig,
) -> Result<Outcome, SearchError> {
    let extent = view.extent();
    for point in [start, end] {
        if !extent.contains(point) {
            return Err(SearchError::OutOfRange { point, extent });
        }
    }
    match strategy {
        Strategy::Bfs => Ok(bfs(view, reach, start, end)),
        Strategy::DfsRecursive => dfs_recursive(view, reach, start, end, config.max_recursion_depth),
        Strategy::DfsIterative => Ok(dfs_iterative(view, reach, start, end)),
        Strategy::AStar => Err(SearchError::NotImplemented(strategy)),
    }
}

/// The outcome of [`Searcher::run`] along with its wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub outcome: Outcome,
    /// For display only.
    pub elapsed: Duration,
}

/// Holds a reachability policy and configuration for repeated searches.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    reach: Reachability,
    config: SearchConfig,
}

impl Searcher {
    /// Create a searcher with the default configuration.
    pub fn new(reach: Reachability) -> Self {
        Self {
            reach,
            config: SearchConfig::default(),
        }
    }

    /// Replace the configuration (builder).
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Current policy.
    #[inline]
    pub fn reachability(&self) -> Reachability {
        self.reach
    }

    /// Replace the policy; applies from the next search.
    pub fn set_reachability(&mut self, reach: Reachability) {
        self.reach = reach;
    }

    /// Current configuration.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run one search, timing it.
    pub fn run<V: GridView + ?Sized>(
        &self,
        strategy: Strategy,
        start: Coord,
        end: Coord,
        view: &V,
    ) -> Result<SearchReport, SearchError> {
        let t0 = Instant::now();
        let result = search(strategy, start, end, view, self.reach, &self.config);
        let elapsed = t0.elapsed();
        match result {
            Ok(outcome) => {
                log::debug!("{strategy} {start} -> {end}: {outcome} in {elapsed:?}");
                Ok(SearchReport {
                    strategy,
                    outcome,
                    elapsed,
                })
            }
            Err(e) => {
                log::warn!("{strategy} {start} -> {end} failed: {e}");
                Err(e)
            }
        }
    }
}
