//! Editor session for gridsearch: paints cell types onto a
//! [`Grid`](gridsearch_core::Grid) with a square brush, keeps the start and
//! end cells unique, and runs path searches whose result is drawn back onto
//! the grid as a path overlay.

pub mod config;
pub mod editor;
pub mod error;

pub use config::{ConfigError, EditorConfig};
pub use editor::Editor;
pub use error::EditorError;
