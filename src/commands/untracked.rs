use crate::core::{
    command_init::CommandInit,
    config::YagConfig,
    error::Result,
    root::GitRoot,
    status::{snapshot, StatusRecord},
};
use colored::*;

/// `yag u`: untracked files only, sorted, as seen from the repository root.
pub fn execute_untracked(config: &YagConfig) -> Result<()> {
    let context = CommandInit::initialize(config)?;
    let records = snapshot(&context.git)?;

    for (i, path) in untracked_from_root(&context.root, &records)
        .iter()
        .enumerate()
    {
        if i % 2 == 0 {
            println!("{}", path.green().on_black());
        } else {
            println!("{}", path.yellow());
        }
    }
    Ok(())
}

/// Sorted untracked paths, rewritten relative to the root with a leading `/`.
pub fn untracked_from_root(root: &GitRoot, records: &[StatusRecord]) -> Vec<String> {
    let mut paths: Vec<&str> = records
        .iter()
        .filter(|r| r.untracked())
        .map(|r| r.path.as_str())
        .collect();
    paths.sort_unstable();
    paths.into_iter().map(|path| root.from_root(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_untracked_from_root() {
        let root = GitRoot {
            root: PathBuf::from("/repo"),
            cwd: PathBuf::from("/repo/cmd"),
        };
        let records = vec![
            StatusRecord::new(b'?', b'?', "zeta.go"),
            StatusRecord::new(b' ', b'M', "tracked.go"),
            StatusRecord::new(b'?', b'?', "../docs/"),
            StatusRecord::new(b'?', b'?', "alpha.go"),
        ];
        assert_eq!(
            untracked_from_root(&root, &records),
            vec!["/docs", "/cmd/alpha.go", "/cmd/zeta.go"]
        );
    }
}
