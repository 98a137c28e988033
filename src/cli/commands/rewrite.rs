//! Default action: rewrite a commit message
//!
//! Prints the message with its tokens substituted. This is what the git hook
//! runs, so nothing but the message may be written to stdout.

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;

use crate::config;
use crate::substitution::{TokenPolicy, substitute_with};

#[derive(Args, Default)]
pub struct RewriteArgs {
    /// Message to rewrite (instead of positional words)
    #[arg(short, long, conflicts_with = "words", allow_hyphen_values = true)]
    pub message: Option<String>,

    /// Tokenization policy, overriding the config file
    #[arg(long, value_enum)]
    pub policy: Option<TokenPolicy>,

    /// Message words, joined with single spaces
    #[arg(value_name = "MESSAGE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl RewriteArgs {
    fn message(&self) -> Option<String> {
        let message = match &self.message {
            Some(message) => message.clone(),
            None => self.words.join(" "),
        };
        (!message.is_empty()).then_some(message)
    }
}

pub fn execute(args: RewriteArgs, workdir: &Path, config_path: Option<&Path>) -> Result<()> {
    let Some(message) = args.message() else {
        anyhow::bail!("no message given");
    };

    let config = config::resolve(workdir, config_path).context("could not load config")?;
    let policy = args.policy.or(config.policy).unwrap_or_default();
    tracing::debug!(origin = %config.origin, ?policy, "rewriting message");

    println!("{}", substitute_with(policy, &config.commit_kinds, &message));
    Ok(())
}
