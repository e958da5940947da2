use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use unblack_core::config::UnblackConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Load the config file, or fall back to defaults when none is given.
pub fn load(path: Option<&Path>) -> Result<UnblackConfig> {
    let Some(path) = path else {
        return Ok(UnblackConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: UnblackConfig = toml::from_str(&contents).context("Invalid config")?;
    config.validate()?;
    Ok(config)
}

/// Print or save the active configuration as TOML.
pub fn run(args: &ConfigArgs, config: &UnblackConfig) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
