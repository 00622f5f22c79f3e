//! **gridsearch-core**: the editable grid model behind gridsearch.
//!
//! This crate provides the typed cells, the bordered [`Grid`] with its
//! brush and batch editing operations, change notifications for renderers,
//! and a small ASCII [`Layout`] format for building grids in tests and demos.

pub mod brush;
pub mod cell;
pub mod events;
pub mod geom;
pub mod grid;
pub mod layout;

pub use brush::Brush;
pub use cell::CellType;
pub use events::{GridEvent, ListenerId};
pub use geom::{Coord, Extent};
pub use grid::{Grid, GridError, Interior};
pub use layout::{Layout, LayoutError, render};
