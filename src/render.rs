use std::io;

use crate::GridOffset;
use crate::camera::Position;
use crate::camera::Viewport;
use crate::grid::Grid;

/// One generation as seen through the camera.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub grid: &'a Grid,
    pub camera: Position,
    pub view: Viewport,
    pub generation: u64,
}

impl<'a> Frame<'a> {
    pub fn new(grid: &'a Grid, camera: Position, view: Viewport, generation: u64) -> Self {
        Self {
            grid,
            camera,
            view,
            generation,
        }
    }

    /// Half-open `(rows, cols)` ranges of the grid covered by the view. Whatever part of the view
    /// falls outside the grid is dropped.
    pub fn visible(&self) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let clip = |start: GridOffset, len: u16, max: usize| {
            let start = (start.max(0) as usize).min(max);
            let end = start.saturating_add(len as usize).min(max);
            start..end
        };

        (
            clip(self.camera.row, self.view.height, self.grid.rows()),
            clip(self.camera.col, self.view.width, self.grid.cols()),
        )
    }

    /// The visible cells, one string of glyphs per row.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let (rows, cols) = self.visible();

        rows.map(move |r| {
            self.grid.row(r)[cols.clone()]
                .iter()
                .map(|c| c.glyph())
                .collect()
        })
    }

    /// Render the visible cells as text, rows separated by newlines.
    pub fn render(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }
}

/// Shows frames and messages to the user.
pub trait Presenter {
    fn present(&mut self, frame: &Frame<'_>) -> io::Result<()>;

    fn notify(&mut self, message: &str) -> io::Result<()>;
}
