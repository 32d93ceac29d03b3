//! Read-only repository metadata through `git2`.
//!
//! Index mutations always go through the `git` binary ([`crate::core::git::GitCli`]);
//! this wrapper only answers questions about HEAD.

use crate::core::error::{Result, YagError};
use git2::Repository;
use std::path::Path;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|_| YagError::NotInGitRepo)?;
        Ok(GitRepo { repo })
    }

    pub fn current_branch(&self) -> Result<String> {
        let head = match self.repo.head() {
            Ok(head) => head,
            // Unborn branch: HEAD points at a ref that does not exist yet
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
                return Ok(self
                    .repo
                    .find_reference("HEAD")?
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix("refs/heads/"))
                    .unwrap_or("-none-")
                    .to_string());
            }
            Err(e) => return Err(e.into()),
        };

        if head.is_branch() {
            Ok(head.shorthand().unwrap_or("-none-").to_string())
        } else {
            match head.target() {
                Some(oid) => Ok(format!("detached at {}", &oid.to_string()[..7])),
                None => Ok("-none-".to_string()),
            }
        }
    }

    /// First line of the HEAD commit message.
    pub fn last_commit_summary(&self) -> Result<String> {
        let head = self.repo.head().map_err(|e| match e.code() {
            git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound => YagError::NoCommitsYet,
            _ => YagError::GitRepo(e),
        })?;
        let commit = head.peel_to_commit()?;
        Ok(commit.summary().unwrap_or("").to_string())
    }
}

/// The tag `yag tag` derives from a commit summary: its last whitespace-separated word.
pub fn tag_from_summary(summary: &str) -> Option<&str> {
    summary.split_whitespace().last()
}
