use lifecam::camera;
use lifecam::camera::ExitFlags;
use lifecam::camera::Position;
use lifecam::camera::Viewport;
use lifecam::grid::Grid;
use lifecam::rule_set::RuleSet;
use lifecam::rule_set::TOUGH_CELLS;
use lifecam::rule_set::WEAK_CELLS;
use lifecam::world::next_generation;

fn sample() -> Grid {
    Grid::from_lines([".X.", "XX.", "..X"]).unwrap()
}

#[test]
fn test_live_neighbors() {
    let grid = sample();

    assert_eq!(grid.live_neighbors(1, 1), 3);
    assert_eq!(grid.live_neighbors(0, 0), 3);
    assert_eq!(grid.live_neighbors(2, 0), 2);
}

#[test]
fn test_live_neighbors_corner_without_live_neighbors() {
    let grid = Grid::from_lines(["...", ".X.", "..."]).unwrap();

    assert_eq!(grid.live_neighbors(0, 0), 1);

    let grid = Grid::from_lines(["X..", "...", "..X"]).unwrap();

    assert_eq!(grid.live_neighbors(0, 0), 0);
}

#[test]
fn test_single_cell_has_no_neighbors() {
    let alive = Grid::from_lines(["X"]).unwrap();
    let dead = Grid::from_lines(["."]).unwrap();

    assert_eq!(alive.live_neighbors(0, 0), 0);
    assert_eq!(dead.live_neighbors(0, 0), 0);
}

#[test]
fn test_next_generation_tough_cells() {
    // (1, 2) and (2, 1) both see exactly three live cells and are born, (2, 2) starves
    let expected = Grid::from_lines(["XX.", "XXX", ".X."]).unwrap();

    assert_eq!(next_generation(&sample(), &TOUGH_CELLS), expected);
}

#[test]
fn test_next_generation_keeps_input() {
    let grid = sample();
    let _ = next_generation(&grid, &TOUGH_CELLS);

    assert_eq!(grid, sample());
}

#[test]
fn test_next_generation_empty_grid() {
    for rules in [TOUGH_CELLS, WEAK_CELLS, RuleSet::new(0x1FF, 0x1FF)] {
        assert_eq!(next_generation(&Grid::empty(), &rules), Grid::empty());
    }
}

#[test]
fn test_has_live_cells() {
    assert!(Grid::from_lines([".X", ".."]).unwrap().has_live_cells());
    assert!(!Grid::from_lines(["..", ".."]).unwrap().has_live_cells());
    assert!(!Grid::empty().has_live_cells());
}

#[test]
fn test_find_focus_falls_back_to_center() {
    let grid = Grid::dead(4, 4);

    assert_eq!(grid.find_focus(), Position::new(2, 2));
    assert_eq!(Grid::dead(5, 3).find_focus(), Position::new(2, 1));
    assert_eq!(Grid::empty().find_focus(), Position::ORIGIN);
}

#[test]
fn test_find_focus_first_live_cell() {
    assert_eq!(sample().find_focus(), Position::new(0, 1));
}

#[test]
fn test_adjust_diagonal_exit_keeps_camera() {
    let grid = Grid::dead(4, 4);
    let view = Viewport::new(2, 2);
    let focus = Position::new(3, 3);

    assert_eq!(ExitFlags::of(Position::ORIGIN, focus, view).count(), 2);
    assert_eq!(
        camera::adjust(&grid, Position::ORIGIN, focus, view),
        Position::ORIGIN
    );
}

#[test]
fn test_adjust_focus_inside() {
    let grid = Grid::dead(4, 4);
    let view = Viewport::new(2, 2);

    assert_eq!(
        camera::adjust(&grid, Position::ORIGIN, Position::ORIGIN, view),
        Position::ORIGIN
    );
}

#[test]
fn test_adjust_single_edge_exit() {
    let grid = Grid::dead(4, 4);
    let view = Viewport::new(2, 2);

    // Only the row is out of view, so only the row moves
    assert_eq!(
        camera::adjust(&grid, Position::ORIGIN, Position::new(3, 1), view),
        Position::new(2, 0)
    );
    assert_eq!(
        camera::adjust(&grid, Position::new(2, 2), Position::new(2, 0), view),
        Position::new(2, 0)
    );
}

#[test]
fn test_recenter_clamps() {
    let grid = Grid::dead(4, 4);
    let view = Viewport::new(2, 2);

    assert_eq!(
        camera::recenter(&grid, Position::new(3, 3), view),
        Position::new(2, 2)
    );
}

#[test]
fn test_block_is_still_life() {
    let block = Grid::from_lines(["....", ".XX.", ".XX.", "...."]).unwrap();

    assert_eq!(next_generation(&block, &TOUGH_CELLS), block);
    assert_eq!(
        next_generation(&block, &RuleSet::from_counts(&[3, 6], &[2, 3, 4])),
        block
    );
}
