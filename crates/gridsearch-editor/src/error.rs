use std::fmt;

use gridsearch_core::{CellType, GridError};
use gridsearch_paths::SearchError;

use crate::config::ConfigError;

/// Errors returned by [`Editor`](crate::Editor) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    Grid(GridError),
    Search(SearchError),
    Config(ConfigError),
    /// A resize beyond the configured maximum.
    TooLarge { width: i32, height: i32, max: i32 },
    /// The type cannot be used as a painting tool.
    InvalidTool(CellType),
    /// No `Start` cell on the grid.
    MissingStart,
    /// No `End` cell on the grid.
    MissingEnd,
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Search(e) => write!(f, "search: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::TooLarge { width, height, max } => {
                write!(f, "grid size {width}x{height} exceeds the limit of {max}")
            }
            Self::InvalidTool(t) => write!(f, "{t} cannot be painted"),
            Self::MissingStart => f.write_str("place a start cell first"),
            Self::MissingEnd => f.write_str("place an end cell first"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for EditorError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for EditorError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<ConfigError> for EditorError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
