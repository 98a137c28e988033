use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::cli::Output;
use crate::git::GitOperations;
use crate::hooks::{self, HookKind, UninstallOutcome};

#[derive(Args)]
pub struct UninstallArgs {
    /// Hook script to remove lipstick from
    #[arg(long, value_enum, default_value_t = HookKind::CommitMsg)]
    pub hook: HookKind,
}

pub fn execute(args: UninstallArgs, workdir: &Path, output: &Output) -> Result<()> {
    let git = GitOperations::discover(workdir)?;

    match hooks::uninstall(&git, args.hook)? {
        UninstallOutcome::Removed(path) => {
            output.success(&format!("Removed lipstick from {}", path.display()));
        }
        UninstallOutcome::NotInstalled(_) => {
            output.info(&format!(
                "lipstick is not installed in the {} hook",
                args.hook.file_name()
            ));
        }
    }

    Ok(())
}
