use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::cli::Output;
use crate::git::GitOperations;
use crate::hooks::{self, HookKind, InstallOutcome};

#[derive(Args)]
pub struct InstallArgs {
    /// Hook script to install into
    #[arg(long, value_enum, default_value_t = HookKind::CommitMsg)]
    pub hook: HookKind,
}

pub fn execute(args: InstallArgs, workdir: &Path, output: &Output) -> Result<()> {
    let git = GitOperations::discover(workdir)?;
    output.verbose(&format!("Repository: {}", git.repo_path().display()));

    match hooks::install(&git, args.hook)? {
        InstallOutcome::Installed(path) => {
            output.success(&format!("Created {} hook", args.hook.file_name()));
            output.table_row("Hook file", &path.display().to_string());
        }
        InstallOutcome::AlreadyInstalled(path) => {
            output.warning(&format!(
                "lipstick is already installed in {}",
                path.display()
            ));
        }
    }

    Ok(())
}
