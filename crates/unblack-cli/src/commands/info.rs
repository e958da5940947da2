use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::input::{describe, open_pnm};
use crate::summary::print_pnm_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Input PNM file (standard input when omitted)
    pub file: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let file = args.file.as_deref();
    let reader = open_pnm(file)?;
    print_pnm_summary(&describe(file), reader.header());
    Ok(())
}
