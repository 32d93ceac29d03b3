use crate::core::{error::Result, root::GitRoot};

/// `yag root`: where the repository root is and where we stand.
pub fn execute_git_root() -> Result<()> {
    let found = GitRoot::discover()?;
    println!("root: {}", found.root.display());
    println!("cdir: {}", found.cwd.display());
    Ok(())
}
