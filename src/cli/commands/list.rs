use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::Output;
use crate::config::{self, TokenMap};

pub fn execute(workdir: &Path, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let config = config::resolve(workdir, config_path).context("could not load config")?;
    output.verbose(&format!("Mappings from {}", config.origin));

    output.blank_line();
    for row in rows(&config.commit_kinds) {
        println!("{row}");
    }
    output.blank_line();

    Ok(())
}

/// One line per mapping, sorted by key, values aligned two columns past the longest key
fn rows(tokens: &TokenMap) -> Vec<String> {
    let longest = tokens.keys().map(|key| key.chars().count()).max().unwrap_or(0);
    let width = longest + 4;

    tokens
        .iter()
        .map(|(key, value)| format!("{:<width$} {value}", format!(":{key}:")))
        .collect()
}
