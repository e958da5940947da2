use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SUDOKU_BOX_SIZE;
use crate::error::{Result, UnblackError};

/// Board geometry for the sudoku checker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudokuConfig {
    /// Edge length of one box; the board is `box_size²` cells square and
    /// holds the digits `1..=box_size²`.
    #[serde(default = "default_box_size")]
    pub box_size: usize,
}

fn default_box_size() -> usize {
    DEFAULT_SUDOKU_BOX_SIZE
}

impl Default for SudokuConfig {
    fn default() -> Self {
        Self {
            box_size: DEFAULT_SUDOKU_BOX_SIZE,
        }
    }
}

impl SudokuConfig {
    /// Board edge length (and largest digit).
    pub fn side(&self) -> usize {
        self.box_size * self.box_size
    }

    pub fn validate(&self) -> Result<()> {
        if self.box_size == 0 {
            return Err(UnblackError::InvalidConfig(
                "sudoku box_size must be at least 1".into(),
            ));
        }
        let side = self.box_size.checked_mul(self.box_size);
        if side.and_then(|n| u16::try_from(n).ok()).is_none() {
            return Err(UnblackError::InvalidConfig(format!(
                "sudoku box_size {} is too large",
                self.box_size
            )));
        }
        Ok(())
    }
}
