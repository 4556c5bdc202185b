use crate::logic::error::GridError;
use crate::models::{grid::SpiralGrid, Coordinate};

/// Returns the position of the smallest value in the grid.
/// Performs a genuine linear scan, so it works for any grid, not only the
/// spiral builder's output. On ties the first occurrence in row-major order
/// wins.
pub fn locate_min(grid: &SpiralGrid) -> Result<Coordinate, GridError> {
    let mut min: Option<(i32, Coordinate)> = None;

    for (row, cells) in grid.cells.iter().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            if min.map_or(true, |(best, _)| value < best) {
                min = Some((value, Coordinate { row, col }));
            }
        }
    }

    min.map(|(_, position)| position).ok_or(GridError::EmptyGrid)
}
