//! Repository root discovery by walking parent directories.

use crate::core::error::{Result, YagError};
use std::path::{Path, PathBuf};

/// Repository root together with the directory the search started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRoot {
    pub root: PathBuf,
    pub cwd: PathBuf,
}

impl GitRoot {
    /// Discover the root above the process working directory.
    pub fn discover() -> Result<Self> {
        Self::discover_from(std::env::current_dir()?)
    }

    /// Walk `start` and its ancestors until one contains a `.git` entry.
    pub fn discover_from(start: impl Into<PathBuf>) -> Result<Self> {
        let cwd = start.into();
        let root = cwd
            .ancestors()
            .find(|dir| dir.join(".git").exists())
            .ok_or(YagError::NotInGitRepo)?
            .to_path_buf();
        log::debug!("Git root {} (cwd {})", root.display(), cwd.display());
        Ok(Self { root, cwd })
    }

    /// Directory components between the root and the working directory.
    pub fn relative_components(&self) -> Vec<String> {
        self.cwd
            .strip_prefix(&self.root)
            .map(|rel| {
                rel.components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Display form of a cwd-relative path as seen from the root, with a leading `/`.
    pub fn from_root(&self, cwd_relative: &str) -> String {
        let joined = self.cwd.join(cwd_relative);
        let relative = joined.strip_prefix(&self.root).unwrap_or(&joined);
        format!("/{}", normalize(relative).display())
    }
}

/// Resolve `.` and `..` lexically, the way status paths like `../x` need it.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
