use core::fmt::Debug;

use clap::ValueEnum;
use tracing::trace;

use crate::GridOffset;
use crate::ScreenSize;
use crate::grid::Grid;

/// A `(row, col)` pair on the grid. Positions are not bounded, callers clamp them where needed.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: GridOffset,
    pub col: GridOffset,
}

impl Position {
    pub const ORIGIN: Position = Position { row: 0, col: 0 };

    pub const fn new(row: GridOffset, col: GridOffset) -> Self {
        Self { row, col }
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Size of the visible window, in cells. Both sides are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: ScreenSize,
    pub height: ScreenSize,
}

impl Viewport {
    pub fn new(width: ScreenSize, height: ScreenSize) -> Self {
        debug_assert!(width > 0, "viewport width must be positive");
        debug_assert!(height > 0, "viewport height must be positive");

        Self { width, height }
    }

    fn w(&self) -> GridOffset {
        self.width as GridOffset
    }

    fn h(&self) -> GridOffset {
        self.height as GridOffset
    }
}

/// Center the viewport on `focus`, keeping it inside the grid where the grid is large enough.
///
/// This is stateless: the result only depends on its inputs, so calling it again with its own
/// output changes nothing.
pub fn recenter(grid: &Grid, focus: Position, view: Viewport) -> Position {
    let max_row = (grid.rows() as GridOffset - view.h()).max(0);
    let max_col = (grid.cols() as GridOffset - view.w()).max(0);

    Position {
        row: (focus.row - view.h() / 2).clamp(0, max_row),
        col: (focus.col - view.w() / 2).clamp(0, max_col),
    }
}

/// Which edges of the current view `focus` lies beyond.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExitFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl ExitFlags {
    pub fn of(camera: Position, focus: Position, view: Viewport) -> Self {
        Self {
            top: focus.row < camera.row,
            bottom: focus.row >= camera.row + view.h(),
            left: focus.col < camera.col,
            right: focus.col >= camera.col + view.w(),
        }
    }

    pub fn count(&self) -> usize {
        [self.top, self.bottom, self.left, self.right]
            .into_iter()
            .filter(|&f| f)
            .count()
    }
}

/// Move the camera only when `focus` leaves the view through exactly one edge, snapping that axis
/// so `focus` sits on the edge it crossed.
///
/// When `focus` is outside on both axes at once, the camera stays where it is.
pub fn adjust(grid: &Grid, camera: Position, focus: Position, view: Viewport) -> Position {
    let exits = ExitFlags::of(camera, focus, view);

    if exits.count() != 1 {
        return camera;
    }

    let mut next = camera;

    if exits.top {
        next.row = focus.row.max(0);
    } else if exits.bottom {
        next.row = (grid.rows() as GridOffset - view.h()).min(focus.row - view.h() + 1);
    }

    if exits.left {
        next.col = focus.col.max(0);
    } else if exits.right {
        next.col = (grid.cols() as GridOffset - view.w()).min(focus.col - view.w() + 1);
    }

    trace!(?camera, ?focus, ?next, "camera snapped");

    next
}

/// Decides where the camera goes once a new generation has been computed.
pub trait CameraTracker {
    fn track(&self, grid: &Grid, camera: Position, focus: Position, view: Viewport) -> Position;
}

/// Recenter on the focus every generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterOnFocus;

impl CameraTracker for CenterOnFocus {
    fn track(&self, grid: &Grid, _camera: Position, focus: Position, view: Viewport) -> Position {
        recenter(grid, focus, view)
    }
}

/// Only move when the focus leaves the view.
#[derive(Debug, Clone, Copy, Default)]
pub struct FollowOnExit;

impl CameraTracker for FollowOnExit {
    fn track(&self, grid: &Grid, camera: Position, focus: Position, view: Viewport) -> Position {
        adjust(grid, camera, focus, view)
    }
}

/// Never move.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCamera;

impl CameraTracker for FixedCamera {
    fn track(&self, _grid: &Grid, camera: Position, _focus: Position, _view: Viewport) -> Position {
        camera
    }
}

/// Camera behaviour, as picked on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CameraPolicy {
    /// Recenter on the first live cell every generation
    #[default]
    Center,
    /// Move only once the first live cell leaves the view
    Follow,
    /// Keep the view at the top left corner
    Fixed,
}

impl CameraTracker for CameraPolicy {
    fn track(&self, grid: &Grid, camera: Position, focus: Position, view: Viewport) -> Position {
        match self {
            CameraPolicy::Center => CenterOnFocus.track(grid, camera, focus, view),
            CameraPolicy::Follow => FollowOnExit.track(grid, camera, focus, view),
            CameraPolicy::Fixed => FixedCamera.track(grid, camera, focus, view),
        }
    }
}
