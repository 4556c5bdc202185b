use crate::logic::{error::GridError, locate::locate_min};
use crate::models::grid::SpiralGrid;

/// Collects the grid values crossed by a straight line from the minimum-value
/// cell to the cell holding `target`, both endpoints included, in walk order.
///
/// The line is rasterised with Bresenham's algorithm. When a row step and a
/// column step are due in the same iteration the walk takes a single diagonal
/// step, so only the corner-to-corner cells are collected.
pub fn find_intersected(target: i32, grid: &SpiralGrid) -> Result<Vec<i32>, GridError> {
    let target_position = grid
        .position_of(target)
        .ok_or(GridError::ValueNotFound(target))?;
    let origin = locate_min(grid)?;

    let (mut row, mut col) = (origin.row as i32, origin.col as i32);
    let (target_row, target_col) = (target_position.row as i32, target_position.col as i32);

    let dx = (target_row - row).abs();
    let dy = (target_col - col).abs();
    let sx = if row < target_row { 1 } else { -1 };
    let sy = if col < target_col { 1 } else { -1 };
    let mut error = dx - dy;

    let mut intersected = Vec::new();
    loop {
        intersected.push(grid.cells[row as usize][col as usize]);
        if row == target_row && col == target_col {
            break;
        }
        let e2 = 2 * error;
        if e2 > -dy {
            error -= dy;
            row += sx;
        }
        if e2 < dx {
            error += dx;
            col += sy;
        }
    }

    Ok(intersected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::spiral::build_spiral;

    // build_spiral(5) for reference:
    // 25 24 23 22 21
    // 10  9  8  7 20
    // 11  2  1  6 19
    // 12  3  4  5 18
    // 13 14 15 16 17

    #[test]
    fn test_three_by_three_diagonal_takes_a_single_step() {
        let grid = build_spiral(3).unwrap();
        // Centre (1,1) to 7 at (0,2): both Bresenham conditions fire at once,
        // so the walk moves diagonally and skips 8 and 6.
        assert_eq!(find_intersected(7, &grid).unwrap(), vec![1, 7]);
    }

    #[test]
    fn test_target_equal_to_minimum_yields_a_single_cell() {
        let grid = build_spiral(3).unwrap();
        assert_eq!(find_intersected(1, &grid).unwrap(), vec![1]);
    }

    #[test]
    fn test_straight_vertical_line() {
        let grid = build_spiral(3).unwrap();
        // 8 sits directly above the centre
        assert_eq!(find_intersected(8, &grid).unwrap(), vec![1, 8]);
    }

    #[test]
    fn test_endpoints_are_included_for_every_target() {
        let grid = build_spiral(5).unwrap();
        for target in 1..=25 {
            let path = find_intersected(target, &grid).unwrap();
            assert_eq!(*path.first().unwrap(), 1, "path to {target} must start at the centre");
            assert_eq!(*path.last().unwrap(), target, "path to {target} must end at the target");
        }
    }

    #[test]
    fn test_diagonal_walk_to_the_far_corner() {
        let grid = build_spiral(5).unwrap();
        assert_eq!(find_intersected(21, &grid).unwrap(), vec![1, 7, 21]);
    }

    #[test]
    fn test_mixed_straight_and_diagonal_steps() {
        let grid = build_spiral(5).unwrap();
        assert_eq!(find_intersected(20, &grid).unwrap(), vec![1, 6, 20]);
    }

    #[test]
    fn test_walk_toward_the_lower_left() {
        let grid = build_spiral(5).unwrap();
        assert_eq!(find_intersected(13, &grid).unwrap(), vec![1, 3, 13]);
    }

    #[test]
    fn test_missing_target_is_a_hard_error() {
        let grid = build_spiral(3).unwrap();
        assert_eq!(find_intersected(0, &grid), Err(GridError::ValueNotFound(0)));
        assert_eq!(find_intersected(10, &grid), Err(GridError::ValueNotFound(10)));
    }
}
