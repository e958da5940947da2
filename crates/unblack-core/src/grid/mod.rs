pub mod array2d;
pub mod bit_grid;

pub use array2d::Array2D;
pub use bit_grid::BitGrid;
