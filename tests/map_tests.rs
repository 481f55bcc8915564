use lifecam::grid::Grid;
use lifecam::map;
use lifecam::map::MapError;

#[test]
fn test_read_map() -> anyhow::Result<()> {
    let grid = map::read_map("tests/maps/diagonal.txt")?;

    assert_eq!(grid, Grid::from_lines(["X.", ".X"])?);

    Ok(())
}

#[test]
fn test_read_map_pads_ragged_rows() -> anyhow::Result<()> {
    let grid = map::read_map("tests/maps/ragged.txt")?;

    let expected = Grid::from_lines(["XX....", "X.....", "......", ".....X"])?;
    assert_eq!(grid, expected);

    Ok(())
}

#[test]
fn test_read_map_not_found() {
    let err = map::read_map("tests/maps/non_existent_file.txt").unwrap_err();

    assert!(matches!(err, MapError::NotFound { .. }));
    assert!(err.to_string().contains("non_existent_file.txt"));
}

#[test]
fn test_fixture_maps() -> anyhow::Result<()> {
    let map_dir = std::fs::read_dir("tests/maps")?;
    let mut loaded = 0;

    for entry in map_dir {
        let path = entry?.path();
        let grid = map::read_map(&path)?;

        assert!(grid.has_live_cells(), "{} has no live cells", path.display());
        for row in grid.iter_rows() {
            assert_eq!(row.len(), grid.cols());
        }

        loaded += 1;
    }

    assert!(loaded >= 4);

    Ok(())
}
