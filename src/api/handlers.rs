pub mod grid;
pub mod intersections;

pub use grid::get_grid;
pub use intersections::post_intersections;

/// Grid side length applied when a request omits `size`.
pub const DEFAULT_SIZE: i32 = 10;
