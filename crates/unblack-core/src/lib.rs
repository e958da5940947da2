pub mod config;
pub mod consts;
pub mod error;
pub mod fill;
pub mod grid;
pub mod io;
pub mod queue;
pub mod sudoku;
