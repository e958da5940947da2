pub mod config;
pub mod edges;
pub mod info;
pub mod input;
pub mod sudoku;
