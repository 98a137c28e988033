//! Create a local `.lipstickrc`
//!
//! Writes the built-in mapping to the working directory so it can be edited.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::cli::Output;
use crate::config::{DEFAULT_CONFIG, OVERRIDE_FILE};
use crate::utils::write_atomic;

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing .lipstickrc
    #[arg(short, long)]
    pub force: bool,
}

pub fn execute(args: InitArgs, workdir: &Path, output: &Output) -> Result<()> {
    let config_path = workdir.join(OVERRIDE_FILE);

    if config_path.exists() && !args.force {
        anyhow::bail!("{OVERRIDE_FILE} exists");
    }

    write_atomic(&config_path, DEFAULT_CONFIG.as_bytes())?;

    output.success(&format!("Created {OVERRIDE_FILE}"));
    output.table_row("Config file", &config_path.display().to_string());
    output.info(&format!("Edit {OVERRIDE_FILE} to customize your mappings"));

    Ok(())
}
