use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::io::pnm::PnmEncoding;
use crate::sudoku::SudokuConfig;

/// Settings shared by every `unblack` command, usually loaded from TOML.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnblackConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub sudoku: SudokuConfig,
}

impl UnblackConfig {
    pub fn validate(&self) -> Result<()> {
        self.sudoku.validate()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Raster encoding for bitmaps written by `edges`.
    #[serde(default)]
    pub encoding: PnmEncoding,
}
