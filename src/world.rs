use tracing::debug;

use crate::camera::CameraTracker;
use crate::camera::Position;
use crate::camera::Viewport;
use crate::cell::Cell;
use crate::grid::Grid;
use crate::render::Frame;
use crate::rule_set::RuleSet;

/// Compute the generation following `grid` under `rules`.
///
/// The whole new grid is built before it is returned, `grid` itself is left untouched. A grid
/// without rows is returned as is.
pub fn next_generation(grid: &Grid, rules: &RuleSet) -> Grid {
    if grid.rows() == 0 {
        return grid.clone();
    }

    Grid::from_fn(grid.rows(), grid.cols(), |r, c| {
        let cell = grid.get(r, c).unwrap_or_default();
        next_cell(cell, grid.live_neighbors(r, c), rules)
    })
}

fn next_cell(cell: Cell, neighbors: u8, rules: &RuleSet) -> Cell {
    let alive = match cell {
        Cell::Alive => rules.stays_alive(neighbors),
        Cell::Dead => rules.becomes_alive(neighbors),
    };

    if alive { Cell::Alive } else { Cell::Dead }
}

/// Everything the driving loop carries from one generation to the next.
///
/// States are values: [`SimulationState::advance`] returns a new one and leaves `self` as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    pub grid: Grid,

    /// Top left corner of the visible window
    pub camera: Position,

    /// Number of generations computed since the map was loaded
    pub generation: u64,
}

impl SimulationState {
    /// Start a simulation on `grid`, with the camera in the top left corner.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            camera: Position::ORIGIN,
            generation: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.grid.has_live_cells()
    }

    /// Compute the next generation, then let `tracker` move the camera towards its focus.
    pub fn advance(&self, rules: &RuleSet, tracker: &dyn CameraTracker, view: Viewport) -> Self {
        let grid = next_generation(&self.grid, rules);
        let focus = grid.find_focus();
        let camera = tracker.track(&grid, self.camera, focus, view);
        let generation = self.generation + 1;

        debug!(
            generation,
            population = grid.population(),
            ?focus,
            ?camera,
            "advanced"
        );

        Self {
            grid,
            camera,
            generation,
        }
    }

    pub fn frame(&self, view: Viewport) -> Frame<'_> {
        Frame::new(&self.grid, self.camera, view, self.generation)
    }
}
