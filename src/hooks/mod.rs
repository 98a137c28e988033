//! Git hook installation
//!
//! lipstick hooks into git by appending a short shell snippet to the
//! `commit-msg` (or `prepare-commit-msg`) script. The snippet pipes the
//! message file through lipstick and writes the result back. Removal strips
//! exactly that snippet and leaves everything else in the script alone.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::git::GitOperations;
use crate::utils::write_atomic;

/// Shebang written when the hook script does not exist yet
const SHEBANG: &str = "#!/bin/sh\n";

/// Snippet appended to the hook script
///
/// The message is passed through `-m` so a message such as `init` or
/// `--help` is never taken for a subcommand or flag.
pub const HOOK_SNIPPET: &str = concat!(
    "\n# simplifies emoji usage\n",
    env!("CARGO_PKG_NAME"),
    " -m \"`cat $1`\" > \"$1\"\n"
);

/// Hook scripts lipstick can be installed into
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HookKind {
    CommitMsg,
    PrepareCommitMsg,
}

impl HookKind {
    pub fn file_name(self) -> &'static str {
        match self {
            HookKind::CommitMsg => "commit-msg",
            HookKind::PrepareCommitMsg => "prepare-commit-msg",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed(PathBuf),
    AlreadyInstalled(PathBuf),
}

#[derive(Debug, PartialEq, Eq)]
pub enum UninstallOutcome {
    Removed(PathBuf),
    NotInstalled(PathBuf),
}

/// Hook content with the snippet appended, or `None` if it is already there
pub fn with_snippet(existing: Option<&str>) -> Option<String> {
    match existing {
        Some(content) if content.contains(HOOK_SNIPPET) => None,
        Some(content) => Some(format!("{content}{HOOK_SNIPPET}")),
        None => Some(format!("{SHEBANG}{HOOK_SNIPPET}")),
    }
}

/// Hook content with every copy of the snippet removed, or `None` if there was none
pub fn without_snippet(content: &str) -> Option<String> {
    content
        .contains(HOOK_SNIPPET)
        .then(|| content.replace(HOOK_SNIPPET, ""))
}

/// Append the snippet to the hook script, creating it if needed.
pub fn install(git: &GitOperations, kind: HookKind) -> Result<InstallOutcome> {
    let hooks_dir = git.hooks_dir();
    let hook_path = hooks_dir.join(kind.file_name());

    let existing = match std::fs::read_to_string(&hook_path) {
        Ok(content) => Some(content),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Unable to read {} hook", hook_path.display()));
        }
    };

    let Some(content) = with_snippet(existing.as_deref()) else {
        tracing::debug!(path = %hook_path.display(), "hook snippet already present");
        return Ok(InstallOutcome::AlreadyInstalled(hook_path));
    };

    // Create hooks directory if it doesn't exist
    std::fs::create_dir_all(&hooks_dir).context("Failed to create hooks directory")?;

    write_atomic(&hook_path, content.as_bytes())
        .with_context(|| format!("Unable to create the {} hook", kind.file_name()))?;

    // Make hook executable on Unix systems
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&hook_path)
            .context("Failed to get hook file metadata")?
            .permissions();
        perms.set_mode(perms.mode() | 0o755);
        std::fs::set_permissions(&hook_path, perms)
            .context("Failed to set hook file permissions")?;
    }

    tracing::info!(path = %hook_path.display(), "installed hook");
    Ok(InstallOutcome::Installed(hook_path))
}

/// Strip the snippet from the hook script.
pub fn uninstall(git: &GitOperations, kind: HookKind) -> Result<UninstallOutcome> {
    let hook_path = git.hook_path(kind.file_name());

    if !hook_path.exists() {
        return Ok(UninstallOutcome::NotInstalled(hook_path));
    }

    let content = std::fs::read_to_string(&hook_path)
        .with_context(|| format!("Unable to remove {} hook", kind.file_name()))?;

    let Some(stripped) = without_snippet(&content) else {
        return Ok(UninstallOutcome::NotInstalled(hook_path));
    };

    write_atomic(&hook_path, stripped.as_bytes())
        .with_context(|| format!("Unable to remove {} hook", kind.file_name()))?;

    tracing::info!(path = %hook_path.display(), "removed hook");
    Ok(UninstallOutcome::Removed(hook_path))
}
