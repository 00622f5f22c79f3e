//! The editing session: tool selection, brush painting, start/end
//! placement and the search trigger that draws its result onto the grid.

use gridsearch_core::{Brush, CellType, Coord, Grid, GridEvent, ListenerId};
use gridsearch_paths::{Direction, Outcome, Reachability, SearchReport, Searcher, Strategy};

use crate::config::EditorConfig;
use crate::error::EditorError;

/// One editor session owning a grid.
///
/// At most one `Start` and one `End` exist at a time: placing either removes
/// the previous occurrence first.
#[derive(Debug)]
pub struct Editor {
    grid: Grid,
    config: EditorConfig,
    searcher: Searcher,
    tool: Option<CellType>,
    brush_layers: i32,
    last_report: Option<SearchReport>,
}

impl Editor {
    /// Start a session with a default-sized grid and 4-way reachability.
    pub fn new(config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;
        let grid = Grid::new(config.default_width, config.default_height)?;
        let searcher = Searcher::new(Reachability::cardinal()).with_config(config.search);
        log::info!("editor ready with {} grid", grid.extent());
        Ok(Self {
            grid,
            config,
            searcher,
            tool: None,
            brush_layers: 1,
            last_report: None,
        })
    }

    /// Start a session on an existing grid.
    pub fn with_grid(config: EditorConfig, grid: Grid) -> Result<Self, EditorError> {
        let mut editor = Self::new(config)?;
        let e = grid.extent();
        editor.check_limit(e.width, e.height)?;
        editor.grid = grid;
        Ok(editor)
    }

    /// The edited grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Session settings.
    #[inline]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Forward grid notifications to a renderer.
    pub fn subscribe(&mut self, f: impl FnMut(&GridEvent) + 'static) -> ListenerId {
        self.grid.subscribe(f)
    }

    /// Stop forwarding notifications to `id`.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.grid.unsubscribe(id)
    }

    // -----------------------------------------------------------------------
    // Size
    // -----------------------------------------------------------------------

    fn check_limit(&self, width: i32, height: i32) -> Result<(), EditorError> {
        let max = self.config.max_dimension;
        if width > max || height > max {
            log::warn!("rejected resize to {width}x{height}, limit is {max}");
            return Err(EditorError::TooLarge { width, height, max });
        }
        Ok(())
    }

    /// Resize the grid, keeping the overlapping cells. Returns whether the
    /// size changed.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<bool, EditorError> {
        self.check_limit(width, height)?;
        let changed = self.grid.resize(width, height)?;
        if changed {
            log::info!("grid resized to {}", self.grid.extent());
        }
        Ok(changed)
    }

    /// Return to the configured default size.
    pub fn reset(&mut self) -> Result<bool, EditorError> {
        self.resize(self.config.default_width, self.config.default_height)
    }

    // -----------------------------------------------------------------------
    // Tools and brush
    // -----------------------------------------------------------------------

    /// The selected painting type, if any.
    #[inline]
    pub fn tool(&self) -> Option<CellType> {
        self.tool
    }

    /// Select a painting type, or deselect with `None`. The sentinel type
    /// cannot be painted.
    pub fn select_tool(&mut self, tool: Option<CellType>) -> Result<(), EditorError> {
        if tool == Some(CellType::None) {
            return Err(EditorError::InvalidTool(CellType::None));
        }
        self.tool = tool;
        Ok(())
    }

    /// Configured brush layers, before any tool restriction.
    #[inline]
    pub fn brush_layers(&self) -> i32 {
        self.brush_layers
    }

    /// Set the brush layers, clamped to `1..=max_brush_layers`. Returns the
    /// stored value.
    pub fn set_brush_layers(&mut self, layers: i32) -> i32 {
        self.brush_layers = layers.clamp(1, self.config.max_brush_layers);
        self.brush_layers
    }

    /// The brush a paint action would use. Start and End are always placed
    /// as a single cell.
    pub fn brush(&self) -> Brush {
        match self.tool {
            Some(CellType::Start | CellType::End) => Brush::SINGLE,
            _ => Brush::from_layers(self.brush_layers),
        }
    }

    /// Paint the selected tool at `(row, col)`. Returns the number of cells
    /// changed; clicks outside the grid and paint without a tool change
    /// nothing.
    pub fn paint(&mut self, row: i32, col: i32) -> usize {
        let Some(tool) = self.tool else {
            return 0;
        };
        if !self.grid.in_bounds(row, col) {
            return 0;
        }
        match tool {
            CellType::Start | CellType::End => self.place_unique(row, col, tool),
            _ => self.grid.set_brush(row, col, self.brush(), tool),
        }
    }

    /// Reset the brush area at `(row, col)` to `Floor`.
    pub fn erase(&mut self, row: i32, col: i32) -> usize {
        if !self.grid.in_bounds(row, col) {
            return 0;
        }
        let brush = Brush::from_layers(self.brush_layers);
        self.grid.set_brush(row, col, brush, CellType::Floor)
    }

    fn place_unique(&mut self, row: i32, col: i32, tool: CellType) -> usize {
        if self.grid.at(Coord::new(row, col)) == tool {
            return 0;
        }
        // One batch, so subscribers see a single update per placement.
        let mut batch: Vec<(i32, i32, CellType)> = self
            .grid
            .iter()
            .filter(|&(_, c)| c == tool)
            .map(|(p, _)| (p.row, p.col, CellType::Floor))
            .collect();
        batch.push((row, col, tool));
        let changed = self.grid.set_many(batch);
        log::info!("{tool} placed at ({row}, {col})");
        changed
    }

    /// Bordered-grid mask of the cells a paint at `(row, col)` would touch.
    pub fn highlight(&self, row: i32, col: i32) -> Vec<bool> {
        self.grid.brush_mask(row, col, self.brush())
    }

    // -----------------------------------------------------------------------
    // Reachability
    // -----------------------------------------------------------------------

    /// Moves allowed in the next search.
    #[inline]
    pub fn reachability(&self) -> Reachability {
        self.searcher.reachability()
    }

    /// Replace the allowed moves.
    pub fn set_reachability(&mut self, reach: Reachability) {
        log::debug!("reachability set to {reach:?}");
        self.searcher.set_reachability(reach);
    }

    /// Flip one move; returns whether it is allowed afterwards.
    pub fn toggle_direction(&mut self, dir: Direction) -> bool {
        let mut reach = self.searcher.reachability();
        let on = reach.toggle(dir);
        self.set_reachability(reach);
        on
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Remove the path overlay. Returns the number of cells reset.
    pub fn clear_path(&mut self) -> usize {
        self.grid.clear_type(self.config.path_type, CellType::Floor)
    }

    /// Search from the `Start` cell to the `End` cell and paint the path's
    /// inner cells with the configured overlay. Uses the configured strategy
    /// when `strategy` is `None`.
    pub fn find_path(&mut self, strategy: Option<Strategy>) -> Result<&SearchReport, EditorError> {
        let strategy = strategy.unwrap_or(self.config.strategy);
        self.clear_path();
        let start = self
            .grid
            .find_first(CellType::Start)
            .ok_or(EditorError::MissingStart)?;
        let end = self
            .grid
            .find_first(CellType::End)
            .ok_or(EditorError::MissingEnd)?;

        let snapshot = self.grid.snapshot();
        let report = self.searcher.run(strategy, start, end, &snapshot)?;
        match &report.outcome {
            Outcome::Found(path) => {
                let overlay = self.config.path_type;
                self.grid
                    .set_many(path.interior().iter().map(|p| (p.row, p.col, overlay)));
                log::info!(
                    "{strategy}: {} steps in {:?}",
                    path.steps(),
                    report.elapsed
                );
            }
            Outcome::Unreachable => {
                log::info!("{strategy}: no path from {start} to {end}");
            }
        }
        Ok(&*self.last_report.insert(report))
    }

    /// The most recent successful search.
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }
}
