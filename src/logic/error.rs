use thiserror::Error;

/// Failures raised by the grid-building and intersection functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The builder was asked for a grid with a non-positive side length.
    #[error("grid size must be at least 1, got {0}")]
    InvalidSize(i32),
    /// The requested value does not appear anywhere in the grid.
    #[error("value {0} is not present in the grid")]
    ValueNotFound(i32),
    /// A zero-cell grid has no minimum.
    #[error("cannot locate the minimum of an empty grid")]
    EmptyGrid,
}
