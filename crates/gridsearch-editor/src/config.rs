//! Editor configuration.

use std::fmt;

use gridsearch_core::CellType;
use gridsearch_paths::{SearchConfig, Strategy};

/// Settings for an [`Editor`](crate::Editor) session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Rows of a new or reset grid.
    pub default_width: i32,
    /// Columns of a new or reset grid.
    pub default_height: i32,
    /// Largest width or height accepted by [`Editor::resize`](crate::Editor::resize).
    pub max_dimension: i32,
    /// Largest brush, in layers. A brush of `n` layers covers a
    /// `(2n - 1)` square.
    pub max_brush_layers: i32,
    /// Strategy used by [`Editor::find_path`](crate::Editor::find_path)
    /// when none is given.
    pub strategy: Strategy,
    /// Overlay painted on the cells of a found path.
    pub path_type: CellType,
    /// Passed through to every search.
    pub search: SearchConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_width: 10,
            default_height: 8,
            max_dimension: 100,
            max_brush_layers: 5,
            strategy: Strategy::Bfs,
            path_type: CellType::Path1,
            search: SearchConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Check that the settings are consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_dimension <= 0 {
            return Err(ConfigError::MaxDimension(self.max_dimension));
        }
        for value in [self.default_width, self.default_height] {
            if value <= 0 || value > self.max_dimension {
                return Err(ConfigError::DefaultSize {
                    width: self.default_width,
                    height: self.default_height,
                    max: self.max_dimension,
                });
            }
        }
        if self.max_brush_layers < 1 {
            return Err(ConfigError::BrushLayers(self.max_brush_layers));
        }
        if !self.path_type.is_path() {
            return Err(ConfigError::PathType(self.path_type));
        }
        Ok(())
    }
}

/// Inconsistent [`EditorConfig`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MaxDimension(i32),
    DefaultSize { width: i32, height: i32, max: i32 },
    BrushLayers(i32),
    PathType(CellType),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDimension(v) => write!(f, "max_dimension must be positive, got {v}"),
            Self::DefaultSize { width, height, max } => {
                write!(f, "default size {width}x{height} must be within 1..={max}")
            }
            Self::BrushLayers(v) => write!(f, "max_brush_layers must be at least 1, got {v}"),
            Self::PathType(t) => write!(f, "path_type must be a path overlay, got {t}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = EditorConfig::default();
        assert_eq!(c.validate(), Ok(()));
        assert_eq!((c.default_width, c.default_height), (10, 8));
        assert_eq!(c.max_dimension, 100);
        assert_eq!(c.max_brush_layers, 5);
    }

    #[test]
    fn rejects_bad_values() {
        let c = EditorConfig {
            default_width: 101,
            ..EditorConfig::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::DefaultSize { .. })));

        let c = EditorConfig {
            max_brush_layers: 0,
            ..EditorConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::BrushLayers(0)));

        let c = EditorConfig {
            path_type: CellType::Block,
            ..EditorConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::PathType(CellType::Block)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let c: EditorConfig = serde_json::from_str(r#"{"default_width": 20, "strategy": "DfsIterative"}"#).unwrap();
        assert_eq!(c.default_width, 20);
        assert_eq!(c.default_height, 8);
        assert_eq!(c.strategy, Strategy::DfsIterative);
        assert_eq!(c.search, SearchConfig::default());
    }
}
