use std::fmt;
use std::io::BufRead;

use tracing::debug;

use crate::error::{Result, UnblackError};
use crate::grid::Array2D;
use crate::io::pnm::{PnmKind, PnmReader};

use super::config::SudokuConfig;

/// First rule a board breaks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// A cell holds something other than `1..=side`.
    OutOfRange { col: usize, row: usize, value: u16 },
    /// `value` appears twice in a row.
    Row { row: usize, value: u16 },
    /// `value` appears twice in a column.
    Column { col: usize, value: u16 },
    /// `value` appears twice in the box at (`box_col`, `box_row`).
    Box {
        box_col: usize,
        box_row: usize,
        value: u16,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::OutOfRange { col, row, value } => {
                write!(f, "cell ({col}, {row}) holds out-of-range value {value}")
            }
            Violation::Row { row, value } => write!(f, "row {row} repeats {value}"),
            Violation::Column { col, value } => write!(f, "column {col} repeats {value}"),
            Violation::Box {
                box_col,
                box_row,
                value,
            } => write!(f, "box ({box_col}, {box_row}) repeats {value}"),
        }
    }
}

/// Read a sudoku board from a graymap whose sides and maximum value both
/// equal `config.side()`.
pub fn read_sudoku<R: BufRead>(
    reader: &mut PnmReader<R>,
    config: &SudokuConfig,
) -> Result<Array2D<u16>> {
    config.validate()?;
    let header = reader.header().clone();
    let side = config.side();

    if header.kind != PnmKind::Graymap {
        return Err(UnblackError::UnexpectedKind {
            expected: PnmKind::Graymap,
            found: header.kind,
        });
    }
    if header.width != side || header.height != side {
        return Err(UnblackError::InvalidDimensions {
            width: header.width,
            height: header.height,
        });
    }
    if header.max_value as usize != side {
        return Err(UnblackError::BadDenominator {
            expected: side as u16,
            found: header.max_value,
        });
    }

    let mut grid = Array2D::<u16>::new(side, side);
    for row in 0..side {
        for col in 0..side {
            *grid.at_mut(col, row) = reader.next_sample()?;
        }
    }
    Ok(grid)
}

/// Check rows, then columns, then boxes; report the first broken rule.
///
/// Panics if `grid` is not `box_size²` cells square.
pub fn find_violation(grid: &Array2D<u16>, box_size: usize) -> Option<Violation> {
    let side = box_size * box_size;
    assert!(
        grid.width() == side && grid.height() == side,
        "{}x{} grid is not a board of box size {box_size}",
        grid.width(),
        grid.height()
    );

    let mut seen = Seen::new(side);

    for row in 0..side {
        seen.reset();
        for col in 0..side {
            let value = *grid.at(col, row);
            match seen.insert(value) {
                Insert::Fresh => {}
                Insert::OutOfRange => return Some(Violation::OutOfRange { col, row, value }),
                Insert::Duplicate => return Some(Violation::Row { row, value }),
            }
        }
    }

    for col in 0..side {
        seen.reset();
        for row in 0..side {
            let value = *grid.at(col, row);
            match seen.insert(value) {
                Insert::Fresh => {}
                Insert::OutOfRange => return Some(Violation::OutOfRange { col, row, value }),
                Insert::Duplicate => return Some(Violation::Column { col, value }),
            }
        }
    }

    for box_row in 0..box_size {
        for box_col in 0..box_size {
            seen.reset();
            for dr in 0..box_size {
                for dc in 0..box_size {
                    let (col, row) = (box_col * box_size + dc, box_row * box_size + dr);
                    let value = *grid.at(col, row);
                    match seen.insert(value) {
                        Insert::Fresh => {}
                        Insert::OutOfRange => {
                            return Some(Violation::OutOfRange { col, row, value })
                        }
                        Insert::Duplicate => {
                            return Some(Violation::Box {
                                box_col,
                                box_row,
                                value,
                            })
                        }
                    }
                }
            }
        }
    }

    None
}

pub fn is_solved(grid: &Array2D<u16>, box_size: usize) -> bool {
    match find_violation(grid, box_size) {
        Some(violation) => {
            debug!(%violation, "Sudoku rejected");
            false
        }
        None => true,
    }
}

enum Insert {
    Fresh,
    Duplicate,
    OutOfRange,
}

/// Digits already present in the unit being checked.
struct Seen {
    present: Vec<bool>,
}

impl Seen {
    fn new(side: usize) -> Self {
        Self {
            present: vec![false; side + 1],
        }
    }

    fn reset(&mut self) {
        self.present.fill(false);
    }

    fn insert(&mut self, value: u16) -> Insert {
        let v = value as usize;
        if v == 0 || v >= self.present.len() {
            return Insert::OutOfRange;
        }
        if std::mem::replace(&mut self.present[v], true) {
            Insert::Duplicate
        } else {
            Insert::Fresh
        }
    }
}
