use std::fmt;

use crate::consts::BITS_PER_WORD;

/// Fixed-size two-dimensional grid of single bits.
///
/// Cells are addressed as `(col, row)` with `col < width` and `row < height`.
/// Storage packs the cells row-major into `u64` words, so every access is
/// O(1) regardless of grid size. All cells start out cleared.
///
/// Out-of-range coordinates are a caller bug and panic, like slice indexing.
#[derive(Clone, PartialEq, Eq)]
pub struct BitGrid {
    width: usize,
    height: usize,
    words: Vec<u64>,
}

impl BitGrid {
    /// Create a `width` x `height` grid with every cell set to 0.
    pub fn new(width: usize, height: usize) -> Self {
        let cells = width
            .checked_mul(height)
            .expect("Grid dimensions too large");
        Self {
            width,
            height,
            words: vec![0; cells.div_ceil(BITS_PER_WORD)],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read the cell at `(col, row)`.
    pub fn get(&self, col: usize, row: usize) -> bool {
        let (word, mask) = self.locate(col, row);
        self.words[word] & mask != 0
    }

    /// Write `value` to `(col, row)` and return the value it replaced.
    pub fn set(&mut self, col: usize, row: usize, value: bool) -> bool {
        let (word, mask) = self.locate(col, row);
        let prev = self.words[word] & mask != 0;
        if value {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
        prev
    }

    /// Number of cells holding 1.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Visit every cell, finishing row 0 (left to right) before row 1.
    pub fn for_each_row_major<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, bool),
    {
        for row in 0..self.height {
            for col in 0..self.width {
                visit(col, row, self.get(col, row));
            }
        }
    }

    /// Visit every cell, finishing column 0 (top to bottom) before column 1.
    pub fn for_each_col_major<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, bool),
    {
        for col in 0..self.width {
            for row in 0..self.height {
                visit(col, row, self.get(col, row));
            }
        }
    }

    /// Row-major visit that hands the grid itself to the visitor.
    ///
    /// Each value is read right before its visit, so writes made by earlier
    /// visits to cells later in the order are observed.
    pub fn for_each_row_major_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut Self, usize, usize, bool),
    {
        for row in 0..self.height {
            for col in 0..self.width {
                let bit = self.get(col, row);
                visit(self, col, row, bit);
            }
        }
    }

    /// Column-major counterpart of [`BitGrid::for_each_row_major_mut`].
    pub fn for_each_col_major_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut Self, usize, usize, bool),
    {
        for col in 0..self.width {
            for row in 0..self.height {
                let bit = self.get(col, row);
                visit(self, col, row, bit);
            }
        }
    }

    fn locate(&self, col: usize, row: usize) -> (usize, u64) {
        assert!(
            col < self.width && row < self.height,
            "cell ({col}, {row}) out of bounds for {}x{} grid",
            self.width,
            self.height
        );
        let index = row * self.width + col;
        (index / BITS_PER_WORD, 1u64 << (index % BITS_PER_WORD))
    }
}

/// One line per row, one `0`/`1` digit per cell.
impl fmt::Display for BitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                f.write_str(if self.get(col, row) { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitGrid {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_straddle_word_boundary() {
        // 9x8 = 72 cells spans two storage words.
        let mut grid = BitGrid::new(9, 8);
        assert_eq!(grid.words.len(), 2);
        grid.set(0, 7, true);
        grid.set(8, 7, true);
        assert!(grid.get(0, 7));
        assert!(grid.get(8, 7));
        // (0, 7) is cell 63, the last bit of word 0; (8, 7) is cell 71.
        assert_eq!(grid.words[0], 1 << 63);
        assert_eq!(grid.words[1], 1 << 7);
    }

    #[test]
    fn test_empty_grid_has_no_storage() {
        let grid = BitGrid::new(0, 5);
        assert!(grid.words.is_empty());
        assert_eq!(grid.count_ones(), 0);
    }
}
