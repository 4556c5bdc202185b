use serde::{Deserialize, Serialize};

use crate::models::{Coordinate, Matrix};

/// Square grid of integers produced by the spiral builder.
/// Immutable once built; every value in `[1, size²]` appears exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiralGrid {
    pub size: usize,
    pub cells: Matrix<i32>,
}

impl SpiralGrid {
    /// Creates a zero-filled grid; the builder overwrites every cell.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![0; size]; size],
        }
    }

    pub fn value_at(&self, position: Coordinate) -> i32 {
        self.cells[position.row][position.col]
    }

    /// Row-major scan for the first cell holding `value`.
    pub fn position_of(&self, value: i32) -> Option<Coordinate> {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if *cell == value {
                    return Some(Coordinate { row, col });
                }
            }
        }
        None
    }
}
