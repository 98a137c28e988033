//! Git integration layer for lipstick
//!
//! Locates the repository that owns a working directory and its hooks
//! directory using git2.

use anyhow::{Context, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

/// Git operations handler
pub struct GitOperations {
    repo: Repository,
}

impl GitOperations {
    /// Discover and open the Git repository containing `dir`
    pub fn discover(dir: &Path) -> Result<Self> {
        let repo = Repository::discover(dir).with_context(|| {
            format!(
                "Not a git repository (or any of the parent directories): {}",
                dir.display()
            )
        })?;

        Ok(Self { repo })
    }

    /// Get repository `.git` path
    pub fn repo_path(&self) -> &Path {
        self.repo.path()
    }

    /// Get working directory path
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Directory git runs hooks from
    ///
    /// Honours `core.hooksPath`; a relative value is taken from the working
    /// tree, as git does.
    pub fn hooks_dir(&self) -> PathBuf {
        let configured = self
            .repo
            .config()
            .and_then(|config| config.get_path("core.hooksPath"))
            .ok();

        match configured {
            Some(path) if path.is_absolute() => path,
            Some(path) => self.workdir().unwrap_or(self.repo_path()).join(path),
            None => self.repo_path().join("hooks"),
        }
    }

    /// Path of the hook script `hook_name`
    pub fn hook_path(&self, hook_name: &str) -> PathBuf {
        self.hooks_dir().join(hook_name)
    }
}
