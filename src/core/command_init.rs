//! Common setup for commands that operate inside a repository.
//!
//! # Initialization Steps
//! 1. **Root discovery**: walk up from the working directory to the repository root
//! 2. **Git collaborator**: a [`GitCli`] bound to the working directory, so status paths
//!    and `git add` arguments agree

use crate::core::{config::YagConfig, error::Result, git::GitCli, root::GitRoot};

pub struct CommandContext<'a> {
    pub config: &'a YagConfig,
    pub root: GitRoot,
    pub git: GitCli,
}

pub struct CommandInit;

impl CommandInit {
    /// Fails with `NotInGitRepo` outside a repository.
    pub fn initialize(config: &YagConfig) -> Result<CommandContext<'_>> {
        let root = GitRoot::discover()?;
        let git = GitCli::in_dir(&root.cwd);
        log::debug!("Initialized command in {}", root.root.display());
        Ok(CommandContext { config, root, git })
    }
}
