use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use unblack_core::config::UnblackConfig;
use unblack_core::sudoku::{find_violation, read_sudoku};

use super::input::{describe, open_pnm};

#[derive(Args)]
pub struct SudokuArgs {
    /// Input PGM file (standard input when omitted)
    pub file: Option<PathBuf>,
}

/// Exit successfully only when the board is solved.
pub fn run(args: &SudokuArgs, config: &UnblackConfig) -> Result<ExitCode> {
    let file = args.file.as_deref();
    let mut reader = open_pnm(file)?;
    let board = read_sudoku(&mut reader, &config.sudoku)
        .with_context(|| format!("Invalid sudoku board in {}", describe(file)))?;

    match find_violation(&board, config.sudoku.box_size) {
        None => {
            info!("Sudoku solved");
            Ok(ExitCode::SUCCESS)
        }
        Some(violation) => {
            info!(%violation, "Sudoku not solved");
            Ok(ExitCode::FAILURE)
        }
    }
}
