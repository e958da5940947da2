use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::info;
use unblack_core::config::UnblackConfig;
use unblack_core::fill::clear_edge_connected;
use unblack_core::io::pbm::{read_bit_grid, write_pbm};
use unblack_core::io::pnm::PnmEncoding;

use super::input::{describe, open_pnm};

#[derive(Clone, ValueEnum)]
pub enum EncodingArg {
    Plain,
    Raw,
}

impl From<EncodingArg> for PnmEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Plain => PnmEncoding::Plain,
            EncodingArg::Raw => PnmEncoding::Raw,
        }
    }
}

#[derive(Args)]
pub struct EdgesArgs {
    /// Input PBM file (standard input when omitted)
    pub file: Option<PathBuf>,

    /// Output raster encoding (overrides the config file)
    #[arg(long, value_enum)]
    pub encoding: Option<EncodingArg>,
}

pub fn run(args: &EdgesArgs, config: &UnblackConfig) -> Result<()> {
    let file = args.file.as_deref();
    let mut reader = open_pnm(file)?;
    let mut grid = read_bit_grid(&mut reader)
        .with_context(|| format!("Invalid bitmap in {}", describe(file)))?;

    let stats = clear_edge_connected(&mut grid);
    info!(
        width = grid.width(),
        height = grid.height(),
        seeded = stats.seeded,
        connected = stats.connected,
        "Edge-connected black pixels removed"
    );

    let encoding = args
        .encoding
        .clone()
        .map_or(config.output.encoding, PnmEncoding::from);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_pbm(&grid, encoding, &mut out)?;
    out.flush().context("Failed to write bitmap")?;

    Ok(())
}
