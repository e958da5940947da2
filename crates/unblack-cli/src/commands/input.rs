use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use unblack_core::io::pnm::PnmReader;

/// Open `file`, or standard input when no file is given, and parse its PNM
/// header.
pub fn open_pnm(file: Option<&Path>) -> Result<PnmReader<Box<dyn BufRead>>> {
    let source: Box<dyn BufRead> = match file {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(f))
        }
        None => Box::new(io::stdin().lock()),
    };

    PnmReader::new(source).with_context(|| format!("Failed to read {}", describe(file)))
}

/// Human-readable name of the input source.
pub fn describe(file: Option<&Path>) -> String {
    match file {
        Some(path) => path.display().to_string(),
        None => "standard input".to_string(),
    }
}
