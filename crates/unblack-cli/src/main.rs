mod commands;
mod summary;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "unblack", about = "Bitmap edge cleanup and sudoku checking")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clear black pixels connected to the border of a PBM image
    Edges(commands::edges::EdgesArgs),
    /// Check whether a PGM graymap holds a solved sudoku
    Sudoku(commands::sudoku::SudokuArgs),
    /// Show PNM header information
    Info(commands::info::InfoArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = commands::config::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Edges(args) => commands::edges::run(args, &config).map(|()| ExitCode::SUCCESS),
        Commands::Sudoku(args) => commands::sudoku::run(args, &config),
        Commands::Info(args) => commands::info::run(args).map(|()| ExitCode::SUCCESS),
        Commands::Config(args) => commands::config::run(args, &config).map(|()| ExitCode::SUCCESS),
    }
}
