use crate::logic::error::GridError;
use crate::models::grid::SpiralGrid;

/// Walk order of the spiral: right, down, left, up.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Builds a square grid filled in a clockwise inward spiral.
/// `size²` sits in the top-left corner and the countdown ends with 1 at the
/// innermost cell. Unfilled cells hold 0 during construction, so the walk can
/// turn whenever the next cell is out of bounds or already assigned.
pub fn build_spiral(size: i32) -> Result<SpiralGrid, GridError> {
    if size < 1 {
        return Err(GridError::InvalidSize(size));
    }
    let n = size as usize;
    let mut grid = SpiralGrid::new(n);

    let mut num = size * size;
    let mut direction = 0usize;
    let (mut row, mut col) = (0i32, 0i32);

    for _ in 0..n * n {
        grid.cells[row as usize][col as usize] = num;
        num -= 1;

        let (dr, dc) = DIRECTIONS[direction];
        let (next_row, next_col) = (row + dr, col + dc);

        if in_bounds(next_row, next_col, size) && grid.cells[next_row as usize][next_col as usize] == 0
        {
            row = next_row;
            col = next_col;
        } else {
            // Turn clockwise and step in the new direction.
            direction = (direction + 1) % 4;
            let (dr, dc) = DIRECTIONS[direction];
            row += dr;
            col += dc;
        }
    }

    Ok(grid)
}

fn in_bounds(row: i32, col: i32, size: i32) -> bool {
    (0..size).contains(&row) && (0..size).contains(&col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rejects_zero_size() {
        assert_eq!(build_spiral(0), Err(GridError::InvalidSize(0)));
    }

    #[test]
    fn test_build_rejects_negative_size() {
        assert_eq!(build_spiral(-4), Err(GridError::InvalidSize(-4)));
    }

    #[test]
    fn test_build_size_one_is_a_single_cell() {
        let grid = build_spiral(1).unwrap();
        assert_eq!(grid.cells, vec![vec![1]]);
    }

    #[test]
    fn test_build_three_matches_reference_matrix() {
        let grid = build_spiral(3).unwrap();
        assert_eq!(grid.cells, vec![vec![9, 8, 7], vec![2, 1, 6], vec![3, 4, 5]]);
    }

    #[test]
    fn test_corner_holds_square_of_size() {
        for size in 1..=8 {
            let grid = build_spiral(size).unwrap();
            assert_eq!(grid.cells[0][0], size * size, "corner of a {size}x{size} grid");
        }
    }

    #[test]
    fn test_values_cover_range_exactly_once() {
        for size in [1, 2, 3, 5, 10] {
            let grid = build_spiral(size).unwrap();
            let mut values: Vec<i32> = grid.cells.iter().flatten().copied().collect();
            values.sort_unstable();
            let expected: Vec<i32> = (1..=size * size).collect();
            assert_eq!(values, expected, "values of a {size}x{size} grid");
        }
    }

    #[test]
    fn test_consecutive_values_share_an_edge() {
        let grid = build_spiral(6).unwrap();
        for value in 1..36 {
            let a = grid.position_of(value).unwrap();
            let b = grid.position_of(value + 1).unwrap();
            let row_dist = (a.row as i32 - b.row as i32).abs();
            let col_dist = (a.col as i32 - b.col as i32).abs();
            assert_eq!(
                row_dist + col_dist,
                1,
                "cells holding {value} and {} must be grid-adjacent",
                value + 1
            );
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build_spiral(7).unwrap(), build_spiral(7).unwrap());
    }
}
