use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;
use tracing::warn;

use crate::cell::Cell;
use crate::grid::Grid;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("Map file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read map file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Parse a text map, one row per line. `X` is a live cell, any other character is a dead one.
///
/// Trailing whitespace is stripped from every line. Rows shorter than the widest one are padded
/// with dead cells so the result is rectangular.
pub fn parse_map(text: &str) -> Grid {
    let rows: Vec<Vec<Cell>> = text
        .lines()
        .map(|line| line.trim_end().chars().map(Cell::from_glyph).collect())
        .collect();

    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);

    let padded = rows.iter().filter(|r| r.len() < cols).count();
    if padded > 0 {
        warn!(padded, cols, "Map rows have different lengths. Padding with dead cells");
    }

    Grid::from_fn(rows.len(), cols, |r, c| {
        rows[r].get(c).copied().unwrap_or(Cell::Dead)
    })
}

/// Read and parse the map at `path`.
pub fn read_map(path: impl AsRef<Path>) -> Result<Grid, MapError> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => MapError::NotFound {
            path: path.to_path_buf(),
        },
        _ => MapError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let grid = parse_map(&text);

    info!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "Loaded map"
    );

    Ok(grid)
}
