pub mod check;
pub mod config;

pub use check::{find_violation, is_solved, read_sudoku, Violation};
pub use config::SudokuConfig;
